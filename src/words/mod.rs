//! Seed word pool: the fixed word → correct-origin mapping.
//!
//! The pool is read once when the service is built and never changes
//! afterwards. Sources:
//! 1. **Seed file**: a JSON object `{ "word": "A", ... }` on disk
//! 2. **Embedded seed**: compiled-in JSON, always available
//!
//! Words are stored lowercase and looked up case-insensitively. Codes are
//! kept verbatim; a code outside `A`..`E` simply resolves to no language.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use crate::types::Origin;
use crate::{EtymologyError, Result};

/// Immutable mapping from quiz word to its correct-origin letter code.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    entries: BTreeMap<String, String>,
}

impl WordPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from `(word, code)` pairs.
    pub fn from_entries<W, C>(entries: impl IntoIterator<Item = (W, C)>) -> Self
    where
        W: AsRef<str>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, code)| (word.as_ref().to_lowercase(), code.into()))
                .collect(),
        }
    }

    /// Parse a seed dictionary from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|e| EtymologyError::Configuration(format!("invalid word dictionary: {e}")))?;
        Ok(Self::from_entries(entries))
    }

    /// Load the seed dictionary at `path`.
    ///
    /// A missing or unreadable file yields an empty pool and a warning: the
    /// game still starts, it just has nothing to ask.
    pub fn from_path(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load word dictionary");
                return Self::new();
            }
        };
        match Self::from_json(&content) {
            Ok(pool) => {
                info!(path = %path.display(), words = pool.len(), "word dictionary loaded");
                pool
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load word dictionary");
                Self::new()
            }
        }
    }

    /// Create a pool from the curated seed compiled into the binary.
    pub fn with_embedded_seed() -> Self {
        match Self::from_json(EMBEDDED_SEED) {
            Ok(pool) => pool,
            Err(e) => {
                // Seed is compiled in and covered by tests; an empty pool is
                // still usable.
                warn!(error = %e, "failed to parse embedded word seed");
                Self::new()
            }
        }
    }

    /// Letter code stored for `word`.
    pub fn code(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Correct origin of `word`, if the word is known and its code is valid.
    pub fn origin(&self, word: &str) -> Option<Origin> {
        self.code(word).and_then(Origin::from_code)
    }

    /// Whether `word` is part of the pool.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// All words, alphabetically.
    pub fn words(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over `(word, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), c.as_str()))
    }

    /// Number of words in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw JSON seed data compiled into the binary.
const EMBEDDED_SEED: &str = include_str!("seed.json");
