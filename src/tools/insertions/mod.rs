//! Insertion Tools

pub mod types;
mod utils;

pub use types::*;
use utils::*;

use std::collections::BTreeMap;

/// Classify an insertion value (`"video: <url>"`, `"html: <markup>"`).
///
/// Tags match case-insensitively. A value carrying both tags is a video.
pub fn classify_value(value: &str) -> Insertion {
    parse_insertion(value)
}

/// Split raw insertion entries into per-slot video and markup overrides.
///
/// Keys are truncated toward zero to their integer slot, so `"-0.5"` is slot 0.
/// Untagged values, empty payloads, unparsable keys and keys at or below -1
/// are skipped. When entries collide on a slot, a video
/// replaces markup, markup never replaces a video, and among entries of the
/// same tag the later key wins.
pub fn classify_insertions(insertions: &BTreeMap<String, String>) -> InsertionOverrides {
    let mut overrides = InsertionOverrides::default();

    for (key, value) in insertions {
        let Some(slot) = slot_index(key) else {
            continue;
        };

        match parse_insertion(value) {
            Insertion::Video(url) if !url.is_empty() => {
                overrides.markup_by_slot.remove(&slot);
                overrides.video_by_slot.insert(slot, url);
            }
            Insertion::Markup(markup) if !markup.is_empty() => {
                if !overrides.video_by_slot.contains_key(&slot) {
                    overrides.markup_by_slot.insert(slot, markup);
                }
            }
            _ => {}
        }
    }

    overrides
}
