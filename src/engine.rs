use crate::error::*;
use crate::tools::fallback::extract_fallback_images;
use crate::tools::fetch::{fetch_with_strategy, FetchStrategy};
use crate::tools::insertions::classify_insertions;
use crate::tools::sequence::{build_sequence, DEFAULT_MAX_STEPS};
use crate::tools::settings::extract_settings;
use crate::tools::types::ContentSlot;
use crate::tools::verify::{
    verify_sequence, Prober, DEFAULT_PROBE_CONCURRENCY, DEFAULT_PROBE_TIMEOUT_MS,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    pub fetch_strategy: FetchStrategy,
    pub probe_timeout_ms: u64,
    pub probe_concurrency: usize,
    /// Probe inferred image URLs before trusting them.
    pub verify_images: bool,
    /// Ceiling on main-loop steps of the sequence builder.
    pub max_sequence_steps: usize,
    /// Deadline for the whole call; `None` waits indefinitely.
    pub call_timeout_ms: Option<u64>,
}
impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::Adaptive,
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            probe_concurrency: DEFAULT_PROBE_CONCURRENCY,
            verify_images: true,
            max_sequence_steps: DEFAULT_MAX_STEPS,
            call_timeout_ms: None,
        }
    }
}
impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.fetch_strategy = strategy;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_probe_concurrency(mut self, concurrency: usize) -> Self {
        self.probe_concurrency = concurrency.max(1);
        self
    }

    pub fn with_verify_images(mut self, verify: bool) -> Self {
        self.verify_images = verify;
        self
    }

    pub fn with_max_sequence_steps(mut self, steps: usize) -> Self {
        self.max_sequence_steps = steps;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

/// Where the slots of a [`SequenceResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceSource {
    /// Built from the page's settings payload and verified.
    Settings,
    /// Plain image scan; no video, markup or info slots.
    Fallback,
}

/// Extracted sequence plus telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResult {
    pub slots: Vec<ContentSlot>,
    pub source: SequenceSource,
    /// Why the settings path was not used, for fallback results.
    pub fallback_reason: Option<String>,
    /// Image slots that were probed.
    pub probed: usize,
    /// Image slots dropped because their probe failed.
    pub dropped: usize,
    pub duration_ms: u64,
}

impl SequenceResult {
    /// Consume the result and return just the slots.
    pub fn into_slots(self) -> Vec<ContentSlot> {
        self.slots
    }

    /// True when every probed image failed its existence check.
    pub fn lost_all_images(&self) -> bool {
        self.probed > 0 && self.dropped == self.probed
    }
}

/// Retrieves page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_markup(&self, url: &str) -> Result<String>;
}

/// [`PageFetcher`] backed by `tools::fetch`.
pub struct HttpFetcher {
    pub strategy: FetchStrategy,
}

impl HttpFetcher {
    pub fn new(strategy: FetchStrategy) -> Self {
        Self { strategy }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_markup(&self, url: &str) -> Result<String> {
        Ok(fetch_with_strategy(url, self.strategy).await?.html)
    }
}

pub struct Engine {
    pub fetcher: Arc<dyn PageFetcher>,
    pub prober: Arc<dyn Prober>,
    pub opts: ExtractOptions,
}

impl Engine {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        prober: Arc<dyn Prober>,
        opts: ExtractOptions,
    ) -> Self {
        Self {
            fetcher,
            prober,
            opts,
        }
    }

    /// Fetch `page_url` and extract its content sequence.
    ///
    /// Fails only when the URL is invalid, the markup cannot be fetched, or
    /// the configured call timeout elapses. A timed-out call returns no slots.
    pub async fn extract(&self, page_url: &str) -> Result<SequenceResult> {
        let url = validate_page_url(page_url)?;

        match self.opts.call_timeout_ms {
            Some(ms) => tokio::time::timeout(Duration::from_millis(ms), self.extract_inner(&url))
                .await
                .map_err(|_| LpError::TimedOut {
                    url: url.clone(),
                    after_ms: ms,
                })?,
            None => self.extract_inner(&url).await,
        }
    }

    async fn extract_inner(&self, url: &str) -> Result<SequenceResult> {
        let html = self.fetcher.fetch_markup(url).await?;
        Ok(self.extract_from_markup(url, &html).await)
    }

    /// Extract the content sequence from markup that was already retrieved.
    pub async fn extract_from_markup(&self, page_url: &str, html: &str) -> SequenceResult {
        let start = Instant::now();

        let settings = match extract_settings(html) {
            Ok(settings) => settings,
            Err(absence) => return fallback_result(page_url, html, &absence.to_string(), start),
        };

        let overrides = classify_insertions(&settings.insertions);
        let slots = build_sequence(
            &settings,
            &overrides,
            page_url,
            self.opts.max_sequence_steps,
        );
        if !slots.iter().any(|s| !matches!(s, ContentSlot::Info { .. })) {
            return fallback_result(page_url, html, "settings declare no content", start);
        }

        let (slots, probed, dropped) = if self.opts.verify_images {
            let verified = verify_sequence(
                slots,
                Arc::clone(&self.prober),
                self.opts.probe_concurrency,
            )
            .await;
            (verified.slots, verified.probed, verified.dropped)
        } else {
            (slots, 0, 0)
        };

        SequenceResult {
            slots,
            source: SequenceSource::Settings,
            fallback_reason: None,
            probed,
            dropped,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}

fn fallback_result(page_url: &str, html: &str, reason: &str, start: Instant) -> SequenceResult {
    let slots = extract_fallback_images(html, page_url)
        .into_iter()
        .map(ContentSlot::image)
        .collect();
    SequenceResult {
        slots,
        source: SequenceSource::Fallback,
        fallback_reason: Some(reason.to_string()),
        probed: 0,
        dropped: 0,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Page URLs must be absolute http(s) URLs with a host.
pub fn validate_page_url(page_url: &str) -> Result<String> {
    let trimmed = page_url.trim();
    let u = Url::parse(trimmed).map_err(|_| LpError::InvalidUrl(page_url.into()))?;
    if !matches!(u.scheme(), "http" | "https") || !u.has_host() {
        return Err(LpError::InvalidUrl(page_url.into()));
    }
    Ok(trimmed.to_string())
}
