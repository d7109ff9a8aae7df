// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An atomic display glyph eligible for substitution: either a single
/// character ("A", "x", "7") or a command form ("\\alpha", "\\Sigma").
/// Compared by exact equality; confusability lives in the conflict table.
pub type Symbol = String;

/// The per-call result mapping each placeholder token string to its
/// chosen symbol. Built, consumed and discarded inside one randomization.
pub type AssignmentMap = HashMap<String, Symbol>;

/// The six placeholder categories. The two-character code is what appears
/// in card text, immediately followed by one or more digits ("VL1", "Vg12").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    UpperLatin,
    LowerLatin,
    UpperGreek,
    LowerGreek,
    Digit,
    Any,
}

impl TokenType {
    pub const ALL: [TokenType; 6] = [
        TokenType::UpperLatin,
        TokenType::LowerLatin,
        TokenType::UpperGreek,
        TokenType::LowerGreek,
        TokenType::Digit,
        TokenType::Any,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TokenType::UpperLatin => "VL",
            TokenType::LowerLatin => "Vl",
            TokenType::UpperGreek => "VG",
            TokenType::LowerGreek => "Vg",
            TokenType::Digit => "VN",
            TokenType::Any => "VV",
        }
    }

    pub fn from_code(code: &str) -> Option<TokenType> {
        match code {
            "VL" => Some(TokenType::UpperLatin),
            "Vl" => Some(TokenType::LowerLatin),
            "VG" => Some(TokenType::UpperGreek),
            "Vg" => Some(TokenType::LowerGreek),
            "VN" => Some(TokenType::Digit),
            "VV" => Some(TokenType::Any),
            _ => None,
        }
    }
}
