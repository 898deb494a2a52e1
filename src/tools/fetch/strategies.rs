use dashmap::DashMap;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::{Duration, Instant};

use super::profile::FetchProfile;
use super::types::FetchResult;
use super::utils::{jitter_ms, validate_response};

/// One client per identity, shared by every fetch in the process.
static CLIENTS: Lazy<DashMap<FetchProfile, Client>> = Lazy::new(DashMap::new);

/// Base pause between identities; up to the same again is added as jitter.
const PROFILE_GAP_MS: u64 = 50;

/// Try each identity in turn until one returns usable markup.
pub(super) async fn fetch_with_profiles(
    url: &str,
    profiles: &[FetchProfile],
) -> Result<FetchResult, String> {
    let start = Instant::now();
    let mut failures = Vec::with_capacity(profiles.len());

    for (idx, &profile) in profiles.iter().enumerate() {
        if idx > 0 {
            let pause = PROFILE_GAP_MS + jitter_ms(PROFILE_GAP_MS);
            tokio::time::sleep(Duration::from_millis(pause)).await;
        }

        match get_page(profile, url).await {
            Ok(html) => {
                return Ok(FetchResult {
                    html,
                    profile_used: profile,
                    duration_ms: start.elapsed().as_millis() as u64,
                    attempts: idx + 1,
                })
            }
            Err(reason) => failures.push(format!("{}: {}", profile.name(), reason)),
        }
    }

    Err(match failures.as_slice() {
        [only] => only.clone(),
        _ => format!(
            "all {} profiles failed: [{}]",
            failures.len(),
            failures.join("; ")
        ),
    })
}

async fn get_page(profile: FetchProfile, url: &str) -> Result<String, String> {
    let response = client_for(profile)?
        .get(url)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("unreadable body: {e}"))?;

    validate_response(status, &body)?;
    Ok(body)
}

fn client_for(profile: FetchProfile) -> Result<Client, String> {
    if let Some(client) = CLIENTS.get(&profile) {
        return Ok(client.clone());
    }
    let client = profile
        .client()
        .map_err(|e| format!("client setup failed: {e}"))?;
    Ok(CLIENTS.entry(profile).or_insert(client).clone())
}
