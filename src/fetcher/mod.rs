//! Remote etymology lookup.
//!
//! [`EtymologyFetcher`] is the seam between the service and the outside
//! world. [`WiktionaryClient`] is the production implementation; tests
//! substitute their own.
//!
//! Fetchers never fail with a Rust error: every outcome, including
//! transport faults, is folded into an [`EtymologyResult`] so that callers
//! are forced to handle all three cases. Retry policy belongs to the
//! caller; a fetcher issues exactly one request per call.

mod parse;
mod wiktionary;

use std::time::Duration;

use async_trait::async_trait;

use crate::types::EtymologyResult;
use crate::version;

pub use parse::parse_etymology;
pub use wiktionary::WiktionaryClient;

/// Default endpoint of the MediaWiki action API.
pub const DEFAULT_API_URL: &str = "https://en.wiktionary.org/w/api.php";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of etymology data for a single word.
#[async_trait]
pub trait EtymologyFetcher: Send + Sync {
    /// Fetcher name for logging/debugging.
    fn name(&self) -> &str;

    /// Look up the etymology of `word`.
    async fn fetch(&self, word: &str) -> EtymologyResult;
}

/// Configuration for [`WiktionaryClient`].
///
/// ```rust
/// # use rootroulette::FetcherConfig;
/// # use std::time::Duration;
/// let config = FetcherConfig::new()
///     .api_url("http://localhost:8080/w/api.php")
///     .timeout(Duration::from_secs(3));
/// assert_eq!(config.timeout, Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// MediaWiki API endpoint. Default: English Wiktionary.
    pub api_url: String,
    /// Identifying User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout. Default: 10s.
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: version::user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetcherConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API endpoint.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_english_wiktionary() {
        let config = FetcherConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("rootroulette/"));
    }

    #[test]
    fn builder_overrides() {
        let config = FetcherConfig::new()
            .api_url("http://127.0.0.1:1/api.php")
            .user_agent("test-agent")
            .timeout(Duration::from_millis(250));
        assert_eq!(config.api_url, "http://127.0.0.1:1/api.php");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
