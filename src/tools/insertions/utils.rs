use super::types::Insertion;

/// Markers that tag a video insertion. Searched before the markup marker.
const VIDEO_MARKERS: [&str; 2] = ["video:", "動画:"];

/// Marker that tags a custom HTML insertion.
const MARKUP_MARKER: &str = "html:";

/// Truncate a fractional slot key toward zero ("1.1" -> 1, "-0.5" -> 0).
///
/// Keys that truncate below zero have no slot.
pub(super) fn slot_index(key: &str) -> Option<usize> {
    let value = key.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value <= -1.0 || value >= usize::MAX as f64 {
        return None;
    }
    Some(value.trunc() as usize)
}

/// Parse an insertion value into its tagged variant.
pub(super) fn parse_insertion(value: &str) -> Insertion {
    // ASCII lowercasing keeps byte offsets aligned with `value`
    let lower = value.to_ascii_lowercase();

    let video = VIDEO_MARKERS
        .iter()
        .filter_map(|marker| lower.find(marker).map(|pos| pos + marker.len()))
        .min();
    if let Some(start) = video {
        return Insertion::Video(value[start..].trim().to_string());
    }

    if let Some(pos) = lower.find(MARKUP_MARKER) {
        return Insertion::Markup(value[pos + MARKUP_MARKER.len()..].trim().to_string());
    }

    Insertion::Untagged
}
