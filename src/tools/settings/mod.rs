//! Settings Tools

mod tests;
pub mod types;
mod utils;

pub use types::*;
use utils::*;

/// Locate and deserialize the `window.lpSettings = {...};` payload.
///
/// Every assignment in the markup is tried in order; the first one whose
/// literal parses as a JSON object wins. A missing or malformed payload is
/// reported as [`SettingsAbsence`], never as a hard error.
///
/// # Examples
/// ```
/// use lpseq::tools::settings::extract_settings;
///
/// let html = r#"<script>window.lpSettings = {"firstImageUrl": "/lp/01.jpg", "lastPageNum": 8};</script>"#;
/// let settings = extract_settings(html).unwrap();
/// assert_eq!(settings.last_image_number, 8);
/// ```
pub fn extract_settings(html: &str) -> Result<PageSettings, SettingsAbsence> {
    let offsets = literal_offsets(html);
    if offsets.is_empty() {
        return Err(SettingsAbsence::NotFound);
    }

    let mut last_error = String::new();
    for offset in offsets {
        match parse_leading_object(&html[offset..]) {
            Ok(obj) => return Ok(settings_from_object(&obj)),
            Err(e) => last_error = e,
        }
    }

    Err(SettingsAbsence::Malformed(last_error))
}
