use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::tools::types::InfoLinks;

/// Declared kind of the first page.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum FirstContentKind {
    #[default]
    Image,
    Other,
}

/// Structure a swipe page declares about itself in `window.lpSettings`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    /// URL of the first page's image, if the first page is an image.
    pub first_content_url: Option<String>,
    pub first_content_kind: FirstContentKind,
    /// Highest image number expected to exist.
    pub last_image_number: u64,
    /// Raw insertion entries keyed by fractional slot key ("0.1", "1.1", ...).
    #[serde(default)]
    pub insertions: BTreeMap<String, String>,
    pub company_url: Option<String>,
    pub privacy_url: Option<String>,
    pub law_url: Option<String>,
}

impl PageSettings {
    /// Links for the trailing info panel; missing entries become empty strings.
    pub fn info_links(&self) -> InfoLinks {
        InfoLinks {
            company: self.company_url.clone().unwrap_or_default(),
            privacy: self.privacy_url.clone().unwrap_or_default(),
            law: self.law_url.clone().unwrap_or_default(),
        }
    }
}

/// Why no settings payload could be used. Both cases are ordinary outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsAbsence {
    #[error("no settings assignment found")]
    NotFound,
    #[error("settings payload is malformed: {0}")]
    Malformed(String),
}
