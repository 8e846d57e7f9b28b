//! Etymology service, the single entry point for the quiz front end.
//!
//! Resolution of a word is cache-first:
//!
//! ```text
//! get_word_data(w) ── not in pool ──────────────────────────────▶ None
//!        │
//!        ├─ cache hit ──────────────────────────────────────────▶ WordData
//!        │
//!        └─ miss ─▶ fetch ─┬─ Success ─▶ cache.put(text) ───────▶ WordData
//!                          ├─ NotFound ─▶ cache.put(placeholder) ─▶ WordData
//!                          └─ Error ───▶ (per TransientPolicy) ──▶ WordData
//! ```
//!
//! With the default [`TransientPolicy::NegativeCache`] every outcome is
//! persisted, so a word is fetched at most once over the lifetime of the
//! cache file.

mod builder;

pub use builder::EtymologyServiceBuilder;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task::block_in_place;
use tracing::{debug, info};

use crate::{EtymologyError, Result};
use crate::cache::{EtymologyCache, TransientCooldown};
use crate::fetcher::EtymologyFetcher;
use crate::telemetry;
use crate::types::{EtymologyResult, LANGUAGE_POOL, Origin, WordData};
use crate::words::WordPool;

/// Default number of answer options per question.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// What to do with a fetch that failed for infrastructure reasons.
///
/// Only transient faults (network errors, 429, 5xx) are subject to the
/// policy. Stable faults such as a 404 or an unparseable body are always
/// negative-cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransientPolicy {
    /// Persist the placeholder, exactly like a `NotFound`. The word is never
    /// fetched again while the cache file lives.
    #[default]
    NegativeCache,
    /// Keep the failure out of the durable cache and serve the placeholder
    /// from memory for the given window; fetch again afterwards.
    Cooldown(Duration),
}

/// Placeholder text stored and shown for words without usable etymology.
pub fn placeholder_text(word: &str) -> String {
    format!("Etymology information not available for '{word}'.")
}

/// Orchestrates the word pool, the durable cache and the remote fetcher.
pub struct EtymologyService {
    words: WordPool,
    cache: EtymologyCache,
    fetcher: Arc<dyn EtymologyFetcher>,
    cooldown: Option<TransientCooldown>,
}

impl EtymologyService {
    /// Create a builder for configuring the service.
    pub fn builder() -> EtymologyServiceBuilder {
        EtymologyServiceBuilder::new()
    }

    /// Wire a service from ready-made parts, negative-caching every error.
    pub fn new(
        words: WordPool,
        cache: EtymologyCache,
        fetcher: Arc<dyn EtymologyFetcher>,
    ) -> Self {
        Self {
            words,
            cache,
            fetcher,
            cooldown: None,
        }
    }

    /// Replace the transient-error policy.
    pub fn with_transient_policy(mut self, policy: TransientPolicy) -> Self {
        self.cooldown = match policy {
            TransientPolicy::NegativeCache => None,
            TransientPolicy::Cooldown(ttl) => Some(TransientCooldown::new(ttl)),
        };
        self
    }

    /// The active transient-error policy.
    pub fn transient_policy(&self) -> TransientPolicy {
        match &self.cooldown {
            Some(cooldown) => TransientPolicy::Cooldown(cooldown.ttl()),
            None => TransientPolicy::NegativeCache,
        }
    }

    /// The seed word pool.
    pub fn word_pool(&self) -> &WordPool {
        &self.words
    }

    /// The durable etymology cache.
    pub fn cache(&self) -> &EtymologyCache {
        &self.cache
    }

    // ===== Word selection =====

    /// A uniformly random word from the pool, or `None` if the pool is empty.
    pub fn get_random_word(&self) -> Option<String> {
        self.get_random_word_with_rng(&mut rand::rng())
    }

    /// [`get_random_word`](Self::get_random_word) with an explicit RNG.
    pub fn get_random_word_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.words.words().choose(rng).cloned()
    }

    /// Up to `n` distinct random words from the pool.
    pub fn sample_words(&self, n: usize) -> Vec<String> {
        self.sample_words_with_rng(n, &mut rand::rng())
    }

    /// [`sample_words`](Self::sample_words) with an explicit RNG.
    pub fn sample_words_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<String> {
        self.words.words().choose_multiple(rng, n).cloned().collect()
    }

    /// Every word in the pool.
    pub fn get_available_words(&self) -> Vec<String> {
        self.words.words()
    }

    /// `(cached word count, pool word count)`.
    pub fn get_cache_info(&self) -> (usize, usize) {
        (self.cache.len(), self.words.len())
    }

    // ===== Answers =====

    /// Full name of the correct origin language of `word`.
    ///
    /// `None` if the word is not in the pool or its code is not `A`..`E`.
    pub fn get_correct_language(&self, word: &str) -> Option<&'static str> {
        self.words.origin(word).map(|origin| origin.name())
    }

    /// `n` shuffled answer options containing `correct_language` once.
    pub fn get_language_options(&self, correct_language: &str, n: usize) -> Vec<String> {
        self.get_language_options_with_rng(correct_language, n, &mut rand::rng())
    }

    /// [`get_language_options`](Self::get_language_options) with an explicit RNG.
    pub fn get_language_options_with_rng<R: Rng + ?Sized>(
        &self,
        correct_language: &str,
        n: usize,
        rng: &mut R,
    ) -> Vec<String> {
        language_options(correct_language, n, rng)
    }

    /// Four shuffled answer options containing `correct_language` once.
    pub fn get_language_options_default(&self, correct_language: &str) -> Vec<String> {
        self.get_language_options(correct_language, DEFAULT_OPTION_COUNT)
    }

    // ===== Resolution =====

    /// Resolve everything the quiz needs for `word`.
    ///
    /// Returns `None` only when the word is not in the pool (or carries an
    /// unknown code). Remote failures never surface here: they resolve to the
    /// placeholder text with no origin languages.
    pub async fn get_word_data(&self, word: &str) -> Option<WordData> {
        let word = word.to_lowercase();
        let code = self.words.code(&word)?;
        let correct_language = Origin::from_code(code)?.name();

        if let Some(cached) = self.cache.get(&word) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
            debug!(word = %word, "etymology cache hit");
            return Some(
                WordData::new(&word, correct_language, cached.text)
                    .with_origin_languages(cached.origin_languages),
            );
        }
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);

        if let Some(message) = self.cooldown.as_ref().and_then(|c| c.failure(&word)) {
            debug!(word = %word, %message, "word is cooling down after a transient failure");
            return Some(WordData::new(&word, correct_language, placeholder_text(&word)));
        }

        let data = match self.fetch(&word).await {
            EtymologyResult::Success {
                text,
                origin_languages,
                ..
            } => {
                self.cache.put(&word, text.clone(), origin_languages.clone(), code);
                WordData::new(&word, correct_language, text).with_origin_languages(origin_languages)
            }
            EtymologyResult::NotFound { message, .. } => {
                self.store_placeholder(&word, code, "not_found", &message);
                WordData::new(&word, correct_language, placeholder_text(&word))
            }
            EtymologyResult::Error { message, transient } => {
                match &self.cooldown {
                    Some(cooldown) if transient => {
                        info!(word = %word, %message, "transient failure, not persisting");
                        cooldown.record(&word, message);
                    }
                    _ => self.store_placeholder(&word, code, "error", &message),
                }
                WordData::new(&word, correct_language, placeholder_text(&word))
            }
        };
        Some(data)
    }

    /// Blocking form of [`get_word_data`](Self::get_word_data).
    ///
    /// Inside a multi-thread Tokio runtime the lookup runs on the current
    /// runtime via `block_in_place`. Outside any runtime it runs on a private
    /// current-thread runtime. A current-thread runtime cannot be blocked,
    /// so calling from one is a `Configuration` error.
    pub fn get_word_data_blocking(&self, word: &str) -> Result<Option<WordData>> {
        if let Ok(handle) = Handle::try_current() {
            if handle.runtime_flavor() == RuntimeFlavor::CurrentThread {
                return Err(EtymologyError::Configuration(
                    "cannot block inside a current-thread runtime; await get_word_data instead"
                        .into(),
                ));
            }
            return Ok(block_in_place(|| handle.block_on(self.get_word_data(word))));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(self.get_word_data(word)))
    }

    async fn fetch(&self, word: &str) -> EtymologyResult {
        let start = Instant::now();
        let result = self.fetcher.fetch(word).await;
        metrics::histogram!(telemetry::FETCH_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
        metrics::counter!(telemetry::FETCHES_TOTAL, "outcome" => result.outcome()).increment(1);
        info!(
            word,
            fetcher = self.fetcher.name(),
            outcome = result.outcome(),
            "etymology fetched"
        );
        result
    }

    fn store_placeholder(&self, word: &str, code: &str, outcome: &'static str, reason: &str) {
        metrics::counter!(telemetry::NEGATIVE_CACHED_TOTAL, "outcome" => outcome).increment(1);
        info!(word, outcome, reason, "caching placeholder etymology");
        self.cache.put(word, placeholder_text(word), Vec::new(), code);
    }
}

/// Build shuffled answer options.
///
/// The result holds `correct_language` exactly once plus up to `n - 1`
/// distinct distractors drawn from [`LANGUAGE_POOL`]. `n == 0` is treated
/// as 1: the correct answer is always present.
pub fn language_options<R: Rng + ?Sized>(
    correct_language: &str,
    n: usize,
    rng: &mut R,
) -> Vec<String> {
    let candidates: Vec<&str> = LANGUAGE_POOL
        .iter()
        .copied()
        .filter(|language| *language != correct_language)
        .collect();

    let mut options: Vec<String> = candidates
        .choose_multiple(rng, n.saturating_sub(1))
        .map(|language| language.to_string())
        .collect();
    options.push(correct_language.to_string());
    options.shuffle(rng);
    options
}
