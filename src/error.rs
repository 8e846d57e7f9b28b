//! Rootroulette error types

/// Rootroulette error types
#[derive(Debug, thiserror::Error)]
pub enum EtymologyError {
    // Remote lookup errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered, but not with the envelope we expect.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Round setup errors
    /// The word pool holds fewer distinct words than a round needs.
    #[error("word pool exhausted: {requested} words requested, {available} available")]
    PoolExhausted { requested: usize, available: usize },

    #[error("prefetch failed: {0}")]
    Prefetch(String),
}

impl EtymologyError {
    /// Whether this error is a transient infrastructure fault.
    ///
    /// Transient: transport failures (timeouts, DNS, resets), HTTP 429 and
    /// HTTP 5xx. Everything else describes a stable condition that will not
    /// change on a second attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            EtymologyError::Http(_) => true,
            EtymologyError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for EtymologyError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => EtymologyError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => EtymologyError::Http(err.to_string()),
        }
    }
}

/// Result type alias for Rootroulette operations
pub type Result<T> = std::result::Result<T, EtymologyError>;
