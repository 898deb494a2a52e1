use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::tools::types::ContentSlot;

/// One hour, matching how often swipe pages are republished.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;

#[derive(Debug, Clone)]
struct CachedSequence {
    slots: Vec<ContentSlot>,
    stored_at: Instant,
}

/// Per-URL cache of extracted sequences with TTL eviction.
///
/// Owned by the caller; the engine itself never caches.
pub struct SequenceCache {
    entries: DashMap<String, CachedSequence>,
    ttl: Duration,
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl SequenceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh slots for `url`, if any. Expired entries are removed on access.
    pub fn get(&self, url: &str) -> Option<Vec<ContentSlot>> {
        let expired = match self.entries.get(url) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                return Some(entry.slots.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(url);
        }
        None
    }

    pub fn insert(&self, url: &str, slots: Vec<ContentSlot>) {
        self.entries.insert(
            url.to_string(),
            CachedSequence {
                slots,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    /// Drop every expired entry and return how many were removed.
    pub fn evict_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
