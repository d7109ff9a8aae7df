// File: src/core/conflict.rs
use crate::core::types::Symbol;
use serde::{Deserialize, Serialize};

/// Static table of confusability groups. Two symbols conflict iff they are
/// identical or co-members of some group. Groups are tiny (at most six
/// entries), so membership checks are plain linear scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictTable {
    groups: Vec<Vec<Symbol>>,
}

impl ConflictTable {
    pub fn new(groups: Vec<Vec<Symbol>>) -> Self {
        Self { groups }
    }

    /// Total over all symbol pairs: a symbol absent from every group
    /// conflicts only with itself.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        self.groups
            .iter()
            .any(|group| group.iter().any(|s| s == a) && group.iter().any(|s| s == b))
    }
}
