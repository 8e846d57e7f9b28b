//! Durable etymology cache backed by a JSON file.
//!
//! # On-disk format
//!
//! A single JSON object keyed by lowercase word:
//!
//! ```json
//! {
//!   "school": {
//!     "word": "school",
//!     "text": "From Middle English scole ...",
//!     "origin_languages": ["Middle English", "Latin"],
//!     "correct_answer": "A",
//!     "cached_at": "2026-10-19T14:03:11.402118"
//!   }
//! }
//! ```
//!
//! # Durability
//!
//! Every [`put`](EtymologyCache::put) and [`clear`](EtymologyCache::clear)
//! rewrites the whole file (tmp file + rename) before returning. A failed
//! write is logged and counted but never surfaced: the in-memory map stays
//! authoritative and the next successful write catches the file up.
//!
//! A missing file is an empty cache. An unreadable or malformed file (bad
//! JSON, wrong shape, any entry missing a field) is discarded as a whole and
//! the cache starts empty; the file is overwritten by the next write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::Result;
use crate::telemetry;

/// One persisted lookup outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedEtymology {
    /// Lowercase word, identical to the map key.
    pub word: String,
    /// Etymology prose, or the placeholder sentence for negative entries.
    pub text: String,
    pub origin_languages: Vec<String>,
    /// Seed-dictionary letter code of the correct origin (`A`..`E`).
    pub correct_answer: String,
    /// Local time the record was written.
    pub cached_at: NaiveDateTime,
}

type Entries = BTreeMap<String, CachedEtymology>;

/// Word-keyed etymology store, synchronised with a file on every write.
///
/// Thread-safe. The write lock is held across the file write, so concurrent
/// writers never interleave partial files.
#[derive(Debug)]
pub struct EtymologyCache {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl EtymologyCache {
    /// Open the cache stored at `path`, loading whatever it holds.
    ///
    /// Never fails: a missing or corrupt file yields an empty cache.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).unwrap_or_default();
        info!(path = %path.display(), entries = entries.len(), "etymology cache loaded");
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Storage location of this cache.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a word, ignoring case.
    pub fn get(&self, word: &str) -> Option<CachedEtymology> {
        self.read().get(&cache_key(word)).cloned()
    }

    /// Store (or overwrite) the record for `word` and persist the cache.
    ///
    /// Persistence failures are logged, not returned.
    pub fn put(
        &self,
        word: &str,
        text: impl Into<String>,
        origin_languages: Vec<String>,
        correct_answer: impl Into<String>,
    ) {
        let key = cache_key(word);
        let record = CachedEtymology {
            word: key.clone(),
            text: text.into(),
            origin_languages,
            correct_answer: correct_answer.into(),
            cached_at: chrono::Local::now().naive_local(),
        };

        let mut entries = self.write();
        entries.insert(key, record);
        self.persist(&entries);
    }

    /// Whether a record exists for `word`, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.read().contains_key(&cache_key(word))
    }

    /// Remove every record and persist the empty cache.
    pub fn clear(&self) {
        let mut entries = self.write();
        entries.clear();
        self.persist(&entries);
    }

    /// Number of distinct cached words.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached words in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    fn persist(&self, entries: &Entries) {
        match save_entries(&self.path, entries) {
            Ok(()) => debug!(path = %self.path.display(), entries = entries.len(), "etymology cache saved"),
            Err(e) => {
                metrics::counter!(telemetry::CACHE_PERSIST_FAILURES_TOTAL).increment(1);
                warn!(path = %self.path.display(), error = %e, "could not save etymology cache");
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Default cache path: `~/.cache/rootroulette/etymology_cache.json`.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("rootroulette")
        .join("etymology_cache.json")
}

fn cache_key(word: &str) -> String {
    word.to_lowercase()
}

// ============================================================================
// Local file I/O
// ============================================================================

/// Load cache entries from disk.
///
/// Returns `None` on missing or corrupt file (logs a warning on corrupt).
fn load_entries(path: &Path) -> Option<Entries> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read etymology cache");
            return None;
        }
    };
    match serde_json::from_str::<Entries>(&content) {
        Ok(entries) => Some(
            entries
                .into_iter()
                .map(|(word, record)| (cache_key(&word), record))
                .collect(),
        ),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt etymology cache, starting empty");
            None
        }
    }
}

/// Save cache entries to disk (atomic write via tmp + rename).
fn save_entries(path: &Path, entries: &Entries) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
