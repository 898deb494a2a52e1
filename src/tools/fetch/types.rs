use serde::{Deserialize, Serialize};

use super::profile::FetchProfile;

const FAST_PROFILES: &[FetchProfile] = &[FetchProfile::Phone];
const ADAPTIVE_PROFILES: &[FetchProfile] = &[
    FetchProfile::Phone,
    FetchProfile::Desktop,
    FetchProfile::Bare,
];

/// How hard to try before a page counts as unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// One request as a phone.
    Fast,
    /// Phone, then desktop, then bare, with a short pause between attempts.
    #[default]
    Adaptive,
}

impl FetchStrategy {
    /// Identities tried in order.
    pub fn profiles(self) -> &'static [FetchProfile] {
        match self {
            Self::Fast => FAST_PROFILES,
            Self::Adaptive => ADAPTIVE_PROFILES,
        }
    }
}

/// Page markup plus how it was obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    pub html: String,
    pub profile_used: FetchProfile,
    pub duration_ms: u64,
    /// 1-based index of the attempt that succeeded
    pub attempts: usize,
}

impl FetchResult {
    pub fn into_html(self) -> String {
        self.html
    }
}
