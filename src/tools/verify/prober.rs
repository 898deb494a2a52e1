use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{redirect, Client};
use std::time::Duration;

use crate::error::Result;
use crate::tools::fetch::FetchProfile;

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
const REDIRECT_LIMIT: usize = 10;
const IMAGE_ACCEPT: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";

/// Existence check for a single URL.
#[async_trait]
pub trait Prober: Send + Sync {
    fn name(&self) -> &'static str;

    /// True when `url` resolves with a success status.
    async fn exists(&self, url: &str) -> bool;
}

/// `HEAD` request prober. Any transport error, timeout or non-2xx status
/// counts as missing. No retries.
///
/// Probes send the phone identity's headers with an image `Accept`.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = FetchProfile::Phone.headers();
        headers.insert(ACCEPT, HeaderValue::from_static(IMAGE_ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    fn name(&self) -> &'static str {
        "http-head"
    }

    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
