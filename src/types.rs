use serde::{Deserialize, Serialize};
use url::Url;

pub use crate::engine::{ExtractOptions, SequenceResult, SequenceSource};
pub use crate::tools::types::{ContentSlot, InfoLinks, SlotKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host(pub String);

impl Host {
    /// Canonicalize host to a stable key: lowercase + IDNA/Punycode
    fn canonicalize(host: &str) -> String {
        let lower = host.to_ascii_lowercase();
        idna::domain_to_ascii(&lower).unwrap_or(lower)
    }

    pub fn from_url(url: &Url) -> Option<Self> {
        url.host_str().map(|h| Host(Self::canonicalize(h)))
    }

    /// Host of a raw URL string, if it parses.
    pub fn from_raw_url(url: &str) -> Option<Self> {
        Url::parse(url.trim()).ok().as_ref().and_then(Self::from_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
