//! Telemetry metric name constants.
//!
//! Centralised metric names for etymology lookups. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `rootroulette_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `outcome` — fetch outcome: "success", "not_found" or "error"

/// Total remote fetches issued.
///
/// Labels: `outcome` ("success" | "not_found" | "error").
pub const FETCHES_TOTAL: &str = "rootroulette_fetches_total";

/// Remote fetch duration in seconds.
pub const FETCH_DURATION_SECONDS: &str = "rootroulette_fetch_duration_seconds";

/// Total word lookups answered from the etymology cache.
pub const CACHE_HITS_TOTAL: &str = "rootroulette_cache_hits_total";

/// Total word lookups that missed the etymology cache.
pub const CACHE_MISSES_TOTAL: &str = "rootroulette_cache_misses_total";

/// Total placeholder records written for words without usable etymology.
///
/// Labels: `outcome` ("not_found" | "error").
pub const NEGATIVE_CACHED_TOTAL: &str = "rootroulette_negative_cached_total";

/// Total failed attempts to write the cache file.
pub const CACHE_PERSIST_FAILURES_TOTAL: &str = "rootroulette_cache_persist_failures_total";
