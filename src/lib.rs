//! Rootroulette - etymology lookup and caching for an origin-language quiz
//!
//! The quiz shows an English word and asks which language it came from.
//! This crate owns everything behind that question: the seed word pool,
//! remote etymology lookup against Wiktionary, a durable word-keyed cache
//! of every lookup outcome, and background prefetch of a whole round.
//!
//! # Example
//!
//! ```rust,no_run
//! use rootroulette::EtymologyService;
//!
//! #[tokio::main]
//! async fn main() -> rootroulette::Result<()> {
//!     let service = EtymologyService::builder()
//!         .cache_path("etymology_cache.json")
//!         .build()?;
//!
//!     if let Some(data) = service.get_word_data("school").await {
//!         let options = service.get_language_options_default(&data.correct_language);
//!         println!("{}: {options:?}", data.word);
//!         println!("{}", data.etymology_text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Round prefetch
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rootroulette::{EtymologyService, spawn_prefetch};
//!
//! # async fn run() -> rootroulette::Result<()> {
//! let service = Arc::new(EtymologyService::builder().build()?);
//! let round = spawn_prefetch(service, 5).wait().await?;
//! assert_eq!(round.len(), 5);
//! # Ok(())
//! # }
//! ```

pub mod cache;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod fetcher;
pub mod prefetch;
pub mod service;
pub mod telemetry;
pub mod types;
pub mod version;
pub mod words;

// Re-export main types at crate root
pub use cache::{CachedEtymology, EtymologyCache, TransientCooldown, default_cache_path};
pub use error::{EtymologyError, Result};
pub use fetcher::{EtymologyFetcher, FetcherConfig, WiktionaryClient, parse_etymology};
pub use prefetch::{PrefetchHandle, prefetch_round, spawn_prefetch, spawn_prefetch_thread};
pub use service::{
    DEFAULT_OPTION_COUNT, EtymologyService, EtymologyServiceBuilder, TransientPolicy,
    language_options, placeholder_text,
};
pub use types::{EtymologyResult, LANGUAGE_POOL, Origin, WordData};
pub use version::{PKG_VERSION, version_string};
pub use words::WordPool;
