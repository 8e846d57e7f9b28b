//! Builder for configuring service instances

use std::path::PathBuf;
use std::sync::Arc;

use super::{EtymologyService, TransientPolicy};
use crate::Result;
use crate::cache::{EtymologyCache, default_cache_path};
use crate::fetcher::{EtymologyFetcher, FetcherConfig, WiktionaryClient};
use crate::words::WordPool;

/// Builder for [`EtymologyService`].
///
/// ```rust,no_run
/// use rootroulette::{EtymologyService, TransientPolicy};
/// use std::time::Duration;
///
/// let service = EtymologyService::builder()
///     .word_dict("data/word_dict.json")
///     .cache_path("etymology_cache.json")
///     .transient_policy(TransientPolicy::Cooldown(Duration::from_secs(300)))
///     .build()?;
/// # Ok::<(), rootroulette::EtymologyError>(())
/// ```
#[derive(Default)]
pub struct EtymologyServiceBuilder {
    word_pool: Option<WordPool>,
    word_dict: Option<PathBuf>,
    cache_path: Option<PathBuf>,
    fetcher: Option<Arc<dyn EtymologyFetcher>>,
    fetcher_config: FetcherConfig,
    transient_policy: TransientPolicy,
}

impl EtymologyServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an in-memory word pool. Takes precedence over [`word_dict`](Self::word_dict).
    pub fn word_pool(mut self, pool: WordPool) -> Self {
        self.word_pool = Some(pool);
        self
    }

    /// Load the word pool from a seed dictionary file.
    ///
    /// A missing or malformed file leaves the pool empty. Without either
    /// this or [`word_pool`](Self::word_pool), the embedded seed is used.
    pub fn word_dict(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_dict = Some(path.into());
        self
    }

    /// Location of the etymology cache file.
    ///
    /// Default: `~/.cache/rootroulette/etymology_cache.json`.
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Use a custom fetcher instead of the Wiktionary client.
    pub fn fetcher(mut self, fetcher: Arc<dyn EtymologyFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Configure the Wiktionary client. Ignored when a custom fetcher is set.
    pub fn fetcher_config(mut self, config: FetcherConfig) -> Self {
        self.fetcher_config = config;
        self
    }

    /// How to treat transient fetch failures.
    pub fn transient_policy(mut self, policy: TransientPolicy) -> Self {
        self.transient_policy = policy;
        self
    }

    /// Build the service, loading the word pool and the cache.
    pub fn build(self) -> Result<EtymologyService> {
        let words = match (self.word_pool, self.word_dict) {
            (Some(pool), _) => pool,
            (None, Some(path)) => WordPool::from_path(&path),
            (None, None) => WordPool::with_embedded_seed(),
        };

        let cache = EtymologyCache::open(self.cache_path.unwrap_or_else(default_cache_path));

        let fetcher: Arc<dyn EtymologyFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(WiktionaryClient::from_config(&self.fetcher_config)?),
        };

        Ok(EtymologyService::new(words, cache, fetcher).with_transient_policy(self.transient_policy))
    }
}
