//! Normalize Tools

mod utils;

use url::Url;
use utils::*;

/// Resolve `candidate` against the page URL `base`.
///
/// - `http://` / `https://` candidates are returned unchanged
/// - `/`-rooted candidates keep only the base scheme and host
/// - anything else is resolved against the base directory
///
/// A base that does not parse degrades to plain string concatenation.
///
/// # Examples
/// ```
/// use lpseq::tools::normalize::normalize_url;
///
/// let base = "https://lp.example.com/campaign/index.html";
/// assert_eq!(normalize_url(base, "/img/01.jpg"), "https://lp.example.com/img/01.jpg");
/// assert_eq!(normalize_url(base, "img/01.jpg"), "https://lp.example.com/campaign/img/01.jpg");
/// ```
pub fn normalize_url(base: &str, candidate: &str) -> String {
    let candidate = candidate.trim();
    if candidate.is_empty() || is_absolute(candidate) || is_opaque(candidate) {
        return candidate.to_string();
    }

    match Url::parse(base.trim()) {
        Ok(base_url) if base_url.has_host() => match base_url.join(candidate) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => concat_fallback(base, candidate),
        },
        _ => concat_fallback(base, candidate),
    }
}

/// Normalize every candidate against the same base.
pub fn normalize_all(base: &str, candidates: &[String]) -> Vec<String> {
    candidates.iter().map(|c| normalize_url(base, c)).collect()
}
