/// `http://` or `https://`, any case.
pub(super) fn is_absolute(candidate: &str) -> bool {
    let lower = candidate
        .get(..8)
        .unwrap_or(candidate)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Schemes that must not be joined onto a page URL.
pub(super) fn is_opaque(candidate: &str) -> bool {
    let lower = candidate
        .get(..11)
        .unwrap_or(candidate)
        .to_ascii_lowercase();
    ["data:", "javascript:", "mailto:", "tel:", "blob:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Best-effort resolution for bases the `url` crate rejects.
pub(super) fn concat_fallback(base: &str, candidate: &str) -> String {
    let base = base.trim();

    if let Some(rest) = candidate.strip_prefix("//") {
        let scheme = base
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
            .unwrap_or("https");
        return format!("{scheme}://{rest}");
    }

    if candidate.starts_with('/') {
        // scheme://host is the first three '/'-separated parts
        let parts: Vec<&str> = base.splitn(4, '/').collect();
        if parts.len() >= 3 && parts[0].ends_with(':') && parts[1].is_empty() {
            return format!("{}//{}{}", parts[0], parts[2], candidate);
        }
        return format!("{}{}", base.trim_end_matches('/'), candidate);
    }

    match base.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() && !dir.ends_with(':') && !dir.ends_with("//") => {
            format!("{dir}/{candidate}")
        }
        _ => format!("{}/{}", base.trim_end_matches('/'), candidate),
    }
}
