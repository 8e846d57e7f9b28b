//! Round prefetch: resolve every word of a round before play starts.
//!
//! Resolution runs off the caller's context (a Tokio task or a dedicated
//! thread) and reports back through a [`PrefetchHandle`], which yields
//! exactly one terminal result: the resolved words, or the reason the
//! round could not be set up.
//!
//! Words are resolved one at a time, in selection order. The service is
//! the only writer to its cache while this runs.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::service::EtymologyService;
use crate::types::WordData;
use crate::{EtymologyError, Result};

/// Resolve `rounds` distinct words for one quiz round.
///
/// Fails with [`EtymologyError::PoolExhausted`] when the pool cannot supply
/// that many resolvable words. The candidate list is a shuffle of the whole
/// pool, so the loop is bounded by the pool size.
pub async fn prefetch_round(service: &EtymologyService, rounds: usize) -> Result<Vec<WordData>> {
    let available = service.word_pool().len();
    if rounds > available {
        return Err(EtymologyError::PoolExhausted {
            requested: rounds,
            available,
        });
    }

    let mut resolved = Vec::with_capacity(rounds);
    for word in service.sample_words(available) {
        if resolved.len() == rounds {
            break;
        }
        match service.get_word_data(&word).await {
            Some(data) => resolved.push(data),
            None => debug!(word = %word, "skipping word without a valid origin code"),
        }
    }

    if resolved.len() < rounds {
        return Err(EtymologyError::PoolExhausted {
            requested: rounds,
            available: resolved.len(),
        });
    }
    Ok(resolved)
}

/// Start prefetching a round on the current Tokio runtime.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn spawn_prefetch(service: Arc<EtymologyService>, rounds: usize) -> PrefetchHandle {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = prefetch_round(&service, rounds).await;
        report(&outcome, rounds);
        let _ = tx.send(outcome);
    });
    PrefetchHandle::new(rx)
}

/// Start prefetching a round on a dedicated OS thread.
///
/// For callers that do not run an async runtime (e.g. a GUI event loop).
/// The thread drives the lookups on its own current-thread runtime.
pub fn spawn_prefetch_thread(service: Arc<EtymologyService>, rounds: usize) -> PrefetchHandle {
    let (tx, rx) = oneshot::channel();
    let spawned = std::thread::Builder::new()
        .name("rootroulette-prefetch".to_string())
        .spawn(move || {
            let outcome = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(EtymologyError::from)
                .and_then(|runtime| runtime.block_on(prefetch_round(&service, rounds)));
            report(&outcome, rounds);
            let _ = tx.send(outcome);
        });
    if let Err(e) = spawned {
        // The sender went down with the closure; the handle reports the failure.
        warn!(error = %e, "could not spawn prefetch thread");
    }
    PrefetchHandle::new(rx)
}

fn report(outcome: &Result<Vec<WordData>>, rounds: usize) {
    match outcome {
        Ok(words) => info!(rounds, resolved = words.len(), "round prefetch complete"),
        Err(e) => warn!(rounds, error = %e, "round prefetch failed"),
    }
}

/// Receiving end of a running prefetch.
///
/// Dropping the handle abandons the result; the prefetch itself runs to
/// completion.
pub struct PrefetchHandle {
    rx: oneshot::Receiver<Result<Vec<WordData>>>,
    taken: bool,
}

impl PrefetchHandle {
    fn new(rx: oneshot::Receiver<Result<Vec<WordData>>>) -> Self {
        Self { rx, taken: false }
    }

    /// Wait for the prefetch to finish.
    pub async fn wait(self) -> Result<Vec<WordData>> {
        self.rx.await.unwrap_or_else(|_| Err(worker_vanished()))
    }

    /// Block the current thread until the prefetch finishes.
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime.
    pub fn wait_blocking(self) -> Result<Vec<WordData>> {
        self.rx.blocking_recv().unwrap_or_else(|_| Err(worker_vanished()))
    }

    /// Poll without blocking.
    ///
    /// Returns `None` while the prefetch is running, then `Some` exactly
    /// once with the terminal result, then `None` forever.
    pub fn try_take(&mut self) -> Option<Result<Vec<WordData>>> {
        if self.taken {
            return None;
        }
        let outcome = match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(worker_vanished()),
        };
        self.taken = true;
        Some(outcome)
    }
}

fn worker_vanished() -> EtymologyError {
    EtymologyError::Prefetch("prefetch worker ended without reporting a result".to_string())
}
