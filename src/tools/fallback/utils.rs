use scraper::Html;

use crate::selectors::{IMG_SELECTOR, PICTURE_SELECTOR, SOURCE_SELECTOR};

/// Image sources from `<img>` elements (`src`, else `data-src`).
pub(super) fn img_sources(doc: &Html) -> Vec<String> {
    doc.select(&IMG_SELECTOR)
        .filter_map(|img| {
            let el = img.value();
            el.attr("src")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .or_else(|| el.attr("data-src").map(str::trim).filter(|s| !s.is_empty()))
                .map(str::to_string)
        })
        .collect()
}

/// First candidate of the first `<source>` inside each `<picture>`.
pub(super) fn picture_sources(doc: &Html) -> Vec<String> {
    doc.select(&PICTURE_SELECTOR)
        .filter_map(|picture| {
            let source = picture.select(&SOURCE_SELECTOR).next()?;
            let srcset = source.value().attr("srcset")?;
            first_srcset_candidate(srcset)
        })
        .collect()
}

/// `"a.webp 1x, b.webp 2x"` -> `"a.webp"`.
pub(super) fn first_srcset_candidate(srcset: &str) -> Option<String> {
    let first = srcset.split(',').next()?.trim();
    let url = first.split_whitespace().next()?;
    Some(url.to_string())
}

/// Vector assets are never swipe pages.
pub(super) fn is_vector(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("data:image/svg") {
        return true;
    }
    let path = lower.split(['?', '#']).next().unwrap_or(&lower);
    path.ends_with(".svg") || path.ends_with(".svgz")
}
