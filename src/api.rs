use crate::engine::*;
use crate::error::*;
use crate::log::ActivityLogger;
use crate::services::cache::SequenceCache;
use crate::tools::types::ContentSlot;
use crate::tools::verify::{HttpProber, Prober};
use crate::types::Host;
use std::sync::Arc;

// Logging helpers; write failures are ignored so logging never breaks extraction
fn log_info(
    logger: Option<&ActivityLogger>,
    host: Option<&str>,
    event: &str,
    details: Option<&str>,
) {
    if let Some(logger) = logger {
        let _ = logger.info(host, event, details);
    }
}

fn log_error(
    logger: Option<&ActivityLogger>,
    host: Option<&str>,
    event: &str,
    details: Option<&str>,
) {
    if let Some(logger) = logger {
        let _ = logger.error(host, event, details);
    }
}

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Arc<dyn PageFetcher>,
    pub prober: Arc<dyn Prober>,
    pub opts: ExtractOptions,
    /// Activity log for outcomes; `None` disables logging.
    pub logger: Option<ActivityLogger>,
}

impl Components {
    /// HTTP fetcher and `HEAD` prober configured from `opts`, logging to
    /// `~/.lpseq/activity.log` when the home directory is usable.
    pub fn from_options(opts: ExtractOptions) -> Result<Self> {
        let prober = HttpProber::new(opts.probe_timeout())?;
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new(opts.fetch_strategy)),
            prober: Arc::new(prober),
            opts,
            logger: ActivityLogger::new().ok(),
        })
    }
}

pub fn make_engine(components: &Components) -> Engine {
    Engine::new(
        Arc::clone(&components.fetcher),
        Arc::clone(&components.prober),
        components.opts.clone(),
    )
}

/* ------------ extraction entrypoints ------------ */

/// Fetch a swipe page and return its ordered content sequence.
///
/// Uses default [`ExtractOptions`]. The only errors are an invalid URL, a
/// failed page fetch, or a configured call timeout; every per-slot problem is
/// absorbed.
pub async fn extract_content_sequence(page_url: &str) -> Result<Vec<ContentSlot>> {
    let components = Components::from_options(ExtractOptions::default())?;
    extract_content_sequence_with(page_url, &components)
        .await
        .map(SequenceResult::into_slots)
}

/// Same as [`extract_content_sequence`] with explicit components, keeping telemetry.
pub async fn extract_content_sequence_with(
    page_url: &str,
    components: &Components,
) -> Result<SequenceResult> {
    let host = Host::from_raw_url(page_url).map(|h| h.0);
    let host = host.as_deref();

    let engine = make_engine(components);
    let result = engine.extract(page_url).await;
    let via = format!("{}+{}", components.fetcher.name(), components.prober.name());
    record_outcome(components.logger.as_ref(), host, &via, &result);
    result
}

/// Blocking variant of [`extract_content_sequence`] on the shared runtime.
pub fn extract_content_sequence_blocking(page_url: &str) -> Result<Vec<ContentSlot>> {
    crate::runtime::block_on(extract_content_sequence(page_url))
}

/// Serve from `cache` when fresh, otherwise extract and store.
pub async fn extract_content_sequence_cached(
    cache: &SequenceCache,
    page_url: &str,
    components: &Components,
) -> Result<Vec<ContentSlot>> {
    if let Some(slots) = cache.get(page_url) {
        let host = Host::from_raw_url(page_url).map(|h| h.0);
        log_info(components.logger.as_ref(), host.as_deref(), "cache_hit", None);
        return Ok(slots);
    }
    let slots = extract_content_sequence_with(page_url, components)
        .await?
        .into_slots();
    cache.insert(page_url, slots.clone());
    Ok(slots)
}

fn record_outcome(
    logger: Option<&ActivityLogger>,
    host: Option<&str>,
    via: &str,
    result: &Result<SequenceResult>,
) {
    match result {
        Ok(r) => {
            let details = format!(
                "{:?} via {}: {} slots, {} of {} images dropped, in {}ms",
                r.source,
                via,
                r.slots.len(),
                r.dropped,
                r.probed,
                r.duration_ms
            );
            log_info(logger, host, "extract", Some(&details));

            if let Some(reason) = &r.fallback_reason {
                log_info(logger, host, "fallback", Some(reason));
            }
            if r.lost_all_images() {
                log_error(
                    logger,
                    host,
                    "verify",
                    Some(&format!("all {} inferred images failed their probe", r.probed)),
                );
            }
        }
        Err(e) => log_error(logger, host, "extract", Some(&format!("via {}: {}", via, e))),
    }
}
