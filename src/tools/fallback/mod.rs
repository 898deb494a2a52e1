//! Fallback Tools
//!
//! Degraded mode for pages without a settings payload: a flat list of image
//! URLs, with no video, markup or info classification.

mod utils;

use utils::*;

use scraper::Html;

use crate::tools::normalize::normalize_url;

/// Scan markup for image URLs.
///
/// Collects `<img>` sources first, then the first `<source>` of each
/// `<picture>`. Vector assets are skipped; every URL is resolved against
/// `page_url` and duplicates are removed keeping the first occurrence.
pub fn extract_fallback_images(html: &str, page_url: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let found = crate::merge!(img_sources(&doc), picture_sources(&doc));

    crate::dedupe!(found, |src: String| {
        if is_vector(&src) {
            String::new()
        } else {
            normalize_url(page_url, &src)
        }
    })
}
