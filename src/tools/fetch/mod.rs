//! Fetch Tools

mod profile;
mod strategies;
mod utils;

pub mod types;

pub use profile::FetchProfile;
pub use types::*;

use crate::error::{LpError, Result};

/// Fetch page markup using the adaptive strategy.
///
/// # Examples
/// ```no_run
/// use lpseq::tools::fetch::fetch;
///
/// # async fn example() -> lpseq::Result<()> {
/// let result = fetch("https://lp.example.com/campaign/").await?;
/// println!("{} after {} attempt(s)", result.profile_used.name(), result.attempts);
/// # Ok(())
/// # }
/// ```
pub async fn fetch(url: &str) -> Result<FetchResult> {
    fetch_with_strategy(url, FetchStrategy::Adaptive).await
}

/// Fetch page markup, trying the identities of `strategy` in order.
pub async fn fetch_with_strategy(url: &str, strategy: FetchStrategy) -> Result<FetchResult> {
    strategies::fetch_with_profiles(url, strategy.profiles())
        .await
        .map_err(|reason| LpError::fetch_error(url, &reason))
}

/// Fetch page markup, discarding telemetry.
pub async fn fetch_html(url: &str) -> Result<String> {
    fetch(url).await.map(FetchResult::into_html)
}
