// File: src/host.rs
//
// The boundary to the hosting card manager. The host owns card storage,
// scheduling and UI; this module only defines the surface the randomizer
// consumes (query, field access, commit) plus the once-per-day driver, and
// ships an in-memory store for the simulator and tests.
use crate::core::engine::RandomizerEngine;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type NoteId = u64;

/// The five fields of a randomizer note. `source_front`/`source_back` hold
/// the authored text with placeholder tokens; `front`/`back` receive the
/// substituted output; `last_update` is the ISO date of the last pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteFields {
    pub source_front: String,
    pub source_back: String,
    pub front: String,
    pub back: String,
    pub last_update: String,
}

/// What the randomizer needs from the host's collection. Querying by
/// due/new/learning status is the host's concern; `due_note_ids` returns
/// whatever the host considers candidates for the given deck.
pub trait CardStore {
    fn due_note_ids(&self, deck: &str) -> Vec<NoteId>;
    fn note(&self, id: NoteId) -> Option<&NoteFields>;
    fn note_mut(&mut self, id: NoteId) -> Option<&mut NoteFields>;
    /// Persist one updated note. In-memory stores may treat this as a no-op.
    fn commit(&mut self, id: NoteId);
}

/// Runs one randomization pass over every candidate note in `deck`,
/// skipping notes already stamped with today's date and notes with an empty
/// source front. Each note gets its own assignment over front and back
/// together. Returns the number of notes updated.
pub fn randomize_due_notes<S: CardStore, R: Rng>(
    store: &mut S,
    deck: &str,
    engine: &RandomizerEngine,
    today: NaiveDate,
    rng: &mut R,
) -> usize {
    let today_str = today.to_string();
    let mut updated = 0;

    for id in store.due_note_ids(deck) {
        let (src_front, src_back) = match store.note(id) {
            Some(n) if n.last_update != today_str && !n.source_front.is_empty() => {
                (n.source_front.clone(), n.source_back.clone())
            }
            _ => continue,
        };

        let (front, back) = engine.randomize_note(&src_front, &src_back, rng);

        if let Some(note) = store.note_mut(id) {
            note.front = front;
            note.back = back;
            note.last_update = today_str.clone();
            store.commit(id);
            updated += 1;
        }
    }
    updated
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredNote {
    deck: String,
    due: bool,
    fields: NoteFields,
}

/// A self-contained `CardStore` keyed by note id, serializable so the
/// simulator can carry a deck across runs (and across simulated days).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    notes: HashMap<NoteId, StoredNote>,
    next_id: NoteId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, deck: &str, source_front: &str, source_back: &str) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(
            id,
            StoredNote {
                deck: deck.to_string(),
                due: true,
                fields: NoteFields {
                    source_front: source_front.to_string(),
                    source_back: source_back.to_string(),
                    ..NoteFields::default()
                },
            },
        );
        id
    }

    pub fn set_due(&mut self, id: NoteId, due: bool) {
        if let Some(note) = self.notes.get_mut(&id) {
            note.due = due;
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn in_deck(note: &StoredNote, deck: &str) -> bool {
        // Deck names nest with "::"; a query for "Math" covers "Math::Calc".
        note.deck == deck || note.deck.starts_with(&format!("{}::", deck))
    }
}

impl CardStore for MemoryStore {
    fn due_note_ids(&self, deck: &str) -> Vec<NoteId> {
        let mut ids: Vec<NoteId> = self
            .notes
            .iter()
            .filter(|(_, n)| n.due && Self::in_deck(n, deck))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn note(&self, id: NoteId) -> Option<&NoteFields> {
        self.notes.get(&id).map(|n| &n.fields)
    }

    fn note_mut(&mut self, id: NoteId) -> Option<&mut NoteFields> {
        self.notes.get_mut(&id).map(|n| &mut n.fields)
    }

    fn commit(&mut self, _id: NoteId) {}
}
