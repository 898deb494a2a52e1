use thiserror::Error;

pub type Result<T> = std::result::Result<T, LpError>;

#[derive(Debug, Error)]
pub enum LpError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The page markup could not be retrieved. The only fatal extraction outcome.
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("extraction of {url} timed out after {after_ms}ms")]
    TimedOut { url: String, after_ms: u64 },

    #[error("storage error during {operation}: {reason}")]
    Storage { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl LpError {
    pub fn fetch_error(url: &str, reason: &str) -> Self {
        LpError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_error(operation: &str, reason: &str) -> Self {
        LpError::Storage {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for LpError {
    fn from(e: std::io::Error) -> Self {
        LpError::Storage {
            operation: "io".into(),
            reason: e.to_string(),
        }
    }
}
impl From<serde_json::Error> for LpError {
    fn from(e: serde_json::Error) -> Self {
        LpError::Other(e.to_string())
    }
}
impl From<reqwest::Error> for LpError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        LpError::Fetch {
            url,
            reason: e.to_string(),
        }
    }
}
