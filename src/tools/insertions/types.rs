use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single insertion value after tag parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    Video(String),
    Markup(String),
    Untagged,
}

/// Per-slot overrides derived from the settings insertions.
///
/// A slot index is present in at most one of the two maps.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertionOverrides {
    #[serde(default)]
    pub video_by_slot: BTreeMap<usize, String>,
    #[serde(default)]
    pub markup_by_slot: BTreeMap<usize, String>,
}

impl InsertionOverrides {
    pub fn video_at(&self, slot: usize) -> Option<&str> {
        self.video_by_slot.get(&slot).map(String::as_str)
    }

    pub fn markup_at(&self, slot: usize) -> Option<&str> {
        self.markup_by_slot.get(&slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.video_by_slot.is_empty() && self.markup_by_slot.is_empty()
    }
}
