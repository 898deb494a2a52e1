//! Browser identities a page fetch can present.
//!
//! Swipe pages are built for phones and some hosts serve a stripped desktop
//! shell without the settings script, so the phone identity always goes first.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{redirect, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PAGE_TIMEOUT: Duration = Duration::from_secs(30);
const IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const MAX_REDIRECTS: usize = 10;

const PHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const BARE_UA: &str = "Mozilla/5.0 (compatible; lpseq)";

const PHONE_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    ("accept-language", "ja-JP,ja;q=0.9"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
];

const DESKTOP_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "ja,en-US;q=0.9,en;q=0.8"),
    ("upgrade-insecure-requests", "1"),
    ("sec-ch-ua", "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\""),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
];

const BARE_HEADERS: &[(&str, &str)] = &[("accept", "*/*")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchProfile {
    /// Mobile Safari on an iPhone
    #[default]
    Phone,
    /// Chrome on Windows
    Desktop,
    /// User-Agent and Accept only, no cookies
    Bare,
}

impl FetchProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phone => "phone (Safari)",
            Self::Desktop => "desktop (Chrome)",
            Self::Bare => "bare",
        }
    }

    fn user_agent(self) -> &'static str {
        match self {
            Self::Phone => PHONE_UA,
            Self::Desktop => DESKTOP_UA,
            Self::Bare => BARE_UA,
        }
    }

    /// Header set sent with every request made under this identity.
    pub(crate) fn headers(self) -> HeaderMap {
        let table = match self {
            Self::Phone => PHONE_HEADERS,
            Self::Desktop => DESKTOP_HEADERS,
            Self::Bare => BARE_HEADERS,
        };

        let mut headers: HeaderMap = table
            .iter()
            .filter_map(|(name, value)| {
                Some((
                    HeaderName::from_bytes(name.as_bytes()).ok()?,
                    HeaderValue::from_str(value).ok()?,
                ))
            })
            .collect();
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent()));
        headers
    }

    /// Page client carrying this identity's headers.
    pub(crate) fn client(self) -> reqwest::Result<Client> {
        Client::builder()
            .default_headers(self.headers())
            .cookie_store(self != Self::Bare)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(PAGE_TIMEOUT)
            .pool_idle_timeout(IDLE_TIMEOUT)
            .build()
    }
}
