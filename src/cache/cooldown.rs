//! Short-lived memory of transient fetch failures.
//!
//! Moka-backed LRU + TTL cache keyed on the lowercase word. While an entry
//! is live the service serves the placeholder instead of fetching again;
//! once it expires the word is fetched on next request.

use std::time::Duration;

use moka::sync::Cache;

/// Default maximum number of words remembered.
const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// In-memory cache of words whose last fetch failed transiently.
///
/// Thread-safe (moka handles concurrent access internally).
pub struct TransientCooldown {
    cache: Cache<String, String>,
    ttl: Duration,
}

impl TransientCooldown {
    /// Create a cooldown cache that remembers failures for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self::with_max_entries(ttl, DEFAULT_MAX_ENTRIES)
    }

    /// Create a cooldown cache with a custom capacity.
    pub fn with_max_entries(ttl: Duration, max: u64) -> Self {
        let cache = Cache::builder().max_capacity(max).time_to_live(ttl).build();
        Self { cache, ttl }
    }

    /// The cooldown window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Remember a transient failure for `word`.
    pub fn record(&self, word: &str, message: impl Into<String>) {
        self.cache.insert(word.to_lowercase(), message.into());
    }

    /// The failure message for `word`, if it is still cooling down.
    pub fn failure(&self, word: &str) -> Option<String> {
        self.cache.get(&word.to_lowercase())
    }

    /// Whether `word` is still cooling down.
    pub fn is_cooling_down(&self, word: &str) -> bool {
        self.cache.contains_key(&word.to_lowercase())
    }

    /// Forget every recorded failure.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
