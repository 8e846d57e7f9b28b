//! Fetch outcome types.

use serde::{Deserialize, Serialize};

/// Outcome of a single remote etymology lookup.
///
/// `NotFound` is a stable fact about the word (no page, no English entry,
/// no etymology section, or an empty one). `Error` is an infrastructure
/// fault; `transient` says whether a later attempt may succeed (transport
/// failure, timeout, 429, 5xx) or not (4xx, unparseable body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EtymologyResult {
    Success {
        word: String,
        /// Etymology paragraphs joined by `\n`. Never empty.
        text: String,
        /// Distinct language names, in order of first appearance.
        origin_languages: Vec<String>,
    },
    NotFound {
        word: String,
        message: String,
    },
    Error {
        message: String,
        #[serde(default)]
        transient: bool,
    },
}

impl EtymologyResult {
    /// Build a `NotFound` outcome.
    pub fn not_found(word: impl Into<String>, message: impl Into<String>) -> Self {
        EtymologyResult::NotFound {
            word: word.into(),
            message: message.into(),
        }
    }

    /// Build an `Error` outcome that may clear up on retry.
    pub fn transient_error(message: impl Into<String>) -> Self {
        EtymologyResult::Error {
            message: message.into(),
            transient: true,
        }
    }

    /// Build an `Error` outcome that will recur on every attempt.
    pub fn permanent_error(message: impl Into<String>) -> Self {
        EtymologyResult::Error {
            message: message.into(),
            transient: false,
        }
    }

    /// Whether the lookup produced usable etymology text.
    pub fn is_success(&self) -> bool {
        matches!(self, EtymologyResult::Success { .. })
    }

    /// Whether this is an `Error` worth retrying later.
    pub fn is_transient(&self) -> bool {
        matches!(self, EtymologyResult::Error { transient: true, .. })
    }

    /// Short outcome label, used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            EtymologyResult::Success { .. } => "success",
            EtymologyResult::NotFound { .. } => "not_found",
            EtymologyResult::Error { .. } => "error",
        }
    }
}
