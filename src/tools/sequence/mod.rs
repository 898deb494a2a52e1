//! Sequence Tools
//!
//! Two counters drive the sequence. The slot index advances for every emitted
//! slot; the image counter advances only when an image slot is emitted. Video
//! and markup slots are extra steps that own no numbered asset, so they never
//! shift the image filenames.

mod utils;

use utils::FilenamePattern;

use crate::tools::insertions::InsertionOverrides;
use crate::tools::normalize::normalize_url;
use crate::tools::settings::PageSettings;
use crate::tools::types::ContentSlot;

/// Upper bound on main-loop steps when the caller does not supply one.
pub const DEFAULT_MAX_STEPS: usize = 1_000;

/// Build the ordered, unverified slot sequence declared by `settings`.
///
/// The first image URL is resolved against `page_url`. The result always ends
/// with exactly one [`ContentSlot::Info`]. The main loop stops after
/// `max_steps` slots even if the last image number has not been reached.
///
/// # Examples
/// ```
/// use lpseq::tools::insertions::InsertionOverrides;
/// use lpseq::tools::sequence::{build_sequence, DEFAULT_MAX_STEPS};
/// use lpseq::tools::settings::PageSettings;
///
/// let settings = PageSettings {
///     first_content_url: Some("https://lp.example.com/img/01.jpg".into()),
///     last_image_number: 3,
///     ..Default::default()
/// };
/// let slots = build_sequence(
///     &settings,
///     &InsertionOverrides::default(),
///     "https://lp.example.com/",
///     DEFAULT_MAX_STEPS,
/// );
/// assert_eq!(slots.len(), 4); // 01, 02, 03 + info
/// ```
pub fn build_sequence(
    settings: &PageSettings,
    overrides: &InsertionOverrides,
    page_url: &str,
    max_steps: usize,
) -> Vec<ContentSlot> {
    let mut slots = Vec::new();

    let first_url = settings
        .first_content_url
        .as_deref()
        .map(|url| normalize_url(page_url, url))
        .filter(|url| !url.is_empty());
    let pattern = first_url.as_deref().and_then(FilenamePattern::infer);

    // Slot 0
    let mut first_is_image = false;
    if let Some(video) = overrides.video_at(0) {
        slots.push(ContentSlot::video(video));
    } else if let Some(url) = &first_url {
        slots.push(ContentSlot::image(url.clone()));
        first_is_image = true;
    }

    if settings.last_image_number > 1 {
        if let Some(pattern) = pattern {
            let start = if first_is_image {
                pattern.start_counter.saturating_add(1)
            } else {
                pattern.start_counter
            };
            slots.extend(main_loop(
                &pattern,
                overrides,
                start,
                settings.last_image_number,
                max_steps,
            ));
        }
    }

    slots.push(ContentSlot::Info {
        links: settings.info_links(),
    });
    slots
}

/// Emit slots 1.. until the image counter passes `last`.
fn main_loop(
    pattern: &FilenamePattern,
    overrides: &InsertionOverrides,
    start: u64,
    last: u64,
    max_steps: usize,
) -> Vec<ContentSlot> {
    let mut slots = Vec::new();
    let mut image_counter = start;
    let mut slot_index = 1usize;

    while image_counter <= last {
        if slots.len() >= max_steps {
            break;
        }

        if let Some(video) = overrides.video_at(slot_index) {
            slots.push(ContentSlot::video(video));
        } else if let Some(markup) = overrides.markup_at(slot_index) {
            slots.push(ContentSlot::markup(markup));
        } else {
            slots.push(ContentSlot::image(pattern.url_for(image_counter)));
            match image_counter.checked_add(1) {
                Some(next) => image_counter = next,
                None => break,
            }
        }
        slot_index += 1;
    }

    slots
}
