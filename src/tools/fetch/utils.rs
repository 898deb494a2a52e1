use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SUSPICIOUS_PATTERNS: [&str; 8] = [
    "verify you are a human",
    "please complete the captcha",
    "captcha challenge",
    "cf-browser-verification",
    "cf-captcha-container",
    "px-captcha",
    "blocked by cloudflare",
    "please enable javascript and cookies",
];

/// Random-ish jitter in milliseconds within [0, range).
pub(super) fn jitter_ms(range: u64) -> u64 {
    if range == 0 {
        return 0;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_nanos(0));
    let nanos = now.subsec_nanos() as u64;
    let micros = (now.as_micros() & 0xFFFF) as u64;
    (nanos ^ (micros << 5)) % range
}

/// Validate an HTTP response before its body is treated as page markup.
///
/// Swipe pages can be tiny shells around a settings script, so there is no
/// minimum length; only failed statuses, empty bodies and bot challenges are
/// rejected.
pub(super) fn validate_response(
    status_code: reqwest::StatusCode,
    body: &str,
) -> Result<(), String> {
    if !status_code.is_success() {
        let label = match status_code {
            reqwest::StatusCode::TOO_MANY_REQUESTS => "rate limited",
            reqwest::StatusCode::FORBIDDEN => "forbidden",
            reqwest::StatusCode::NOT_FOUND => "not found",
            reqwest::StatusCode::UNAUTHORIZED => "unauthorized",
            s if s.is_server_error() => "server error",
            _ => "unexpected status",
        };
        return Err(format!("status {} ({})", status_code.as_u16(), label));
    }

    if body.trim().is_empty() {
        return Err("invalid - empty body".to_string());
    }

    let lower = body.to_ascii_lowercase();
    if let Some(pattern) = SUSPICIOUS_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
    {
        return Err(format!("suspicious - {}", pattern));
    }

    Ok(())
}
