//! Caching subsystem.
//!
//! Two independent caches:
//!
//! - [`EtymologyCache`]: durable, word-keyed store of every lookup outcome,
//!   including placeholder records for words without usable etymology.
//!   Loaded fully at construction, rewritten to disk on every mutation.
//!
//! - [`TransientCooldown`]: opt-in, in-memory TTL cache of words whose last
//!   fetch hit an infrastructure fault. Used only with
//!   [`TransientPolicy::Cooldown`](crate::TransientPolicy::Cooldown), where
//!   such faults are kept out of the durable cache so a later session can
//!   retry them.

pub mod cooldown;
pub mod etymology;

pub use cooldown::TransientCooldown;
pub use etymology::{CachedEtymology, EtymologyCache, default_cache_path};
