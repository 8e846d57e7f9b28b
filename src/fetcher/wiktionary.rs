//! Wiktionary client over the MediaWiki `action=parse` API.
//!
//! See: <https://www.mediawiki.org/wiki/API:Parsing_wikitext>

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::parse::parse_etymology;
use super::{EtymologyFetcher, FetcherConfig};
use crate::types::EtymologyResult;
use crate::{EtymologyError, Result};

/// Fetches rendered Wiktionary pages and extracts their English etymology.
#[derive(Clone)]
pub struct WiktionaryClient {
    http: Client,
    api_url: String,
}

/// `action=parse` response envelope.
///
/// A missing page comes back as HTTP 200 with a top-level `error` object.
#[derive(Debug, Deserialize)]
struct ParseEnvelope {
    #[serde(default)]
    parse: Option<ParsedPage>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: ParsedText,
}

#[derive(Debug, Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

/// What the API said about a page.
enum PageLookup {
    Missing { code: String, info: String },
    Rendered(String),
}

impl WiktionaryClient {
    /// Create a client for English Wiktionary with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&FetcherConfig::default())
    }

    /// Create a client against a custom API endpoint (for testing with wiremock).
    pub fn with_base_url(api_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&FetcherConfig::new().api_url(api_url))
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: &FetcherConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                EtymologyError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// The API endpoint this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn lookup_page(&self, word: &str) -> Result<PageLookup> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "parse"),
                ("page", word),
                ("prop", "text"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EtymologyError::Api {
                status: status.as_u16(),
                message: format!("parse request for '{word}' returned HTTP {status}"),
            });
        }

        let body = response.text().await?;
        let envelope: ParseEnvelope = serde_json::from_str(&body)?;

        match (envelope.error, envelope.parse) {
            (Some(error), _) => Ok(PageLookup::Missing {
                code: error.code,
                info: error.info,
            }),
            (None, Some(page)) => Ok(PageLookup::Rendered(page.text.html)),
            (None, None) => Err(EtymologyError::MalformedResponse(
                "response has neither 'parse' nor 'error'".to_string(),
            )),
        }
    }
}

#[async_trait]
impl EtymologyFetcher for WiktionaryClient {
    fn name(&self) -> &str {
        "wiktionary"
    }

    async fn fetch(&self, word: &str) -> EtymologyResult {
        match self.lookup_page(word).await {
            Ok(PageLookup::Rendered(html)) => parse_etymology(word, &html),
            Ok(PageLookup::Missing { code, info }) => {
                debug!(word, %code, %info, "page missing");
                EtymologyResult::not_found(word, format!("Page '{word}' not found on Wiktionary"))
            }
            Err(e) => {
                warn!(word, error = %e, "etymology fetch failed");
                let message = match e {
                    EtymologyError::Http(_) | EtymologyError::Api { .. } => {
                        format!("Network error: {e}")
                    }
                    _ => format!("Unexpected error: {e}"),
                };
                EtymologyResult::Error {
                    message,
                    transient: e.is_transient(),
                }
            }
        }
    }
}
