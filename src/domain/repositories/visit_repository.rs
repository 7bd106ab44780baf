//! Repository trait for the time-indexed domain store.

use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Store interface for domains indexed by visit time.
///
/// The store keeps at most one score (epoch seconds) per domain, sorted by
/// score. It performs no validation of its own: callers are responsible for
/// supplying finite scores and validated domain names.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisVisitRepository`] - Redis sorted set
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records every (domain, score) entry in one store call.
    ///
    /// A domain that is already present has its score unconditionally
    /// overwritten, regardless of whether the new score is greater or smaller.
    /// Last write wins by call order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is unreachable or the write fails.
    async fn upsert(&self, entries: HashMap<String, f64>) -> Result<(), AppError>;

    /// Returns every domain whose score lies in `[from, to]` inclusive,
    /// in ascending score order (ties in lexical domain order).
    ///
    /// An inverted window (`from > to`) yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is unreachable or the read fails.
    async fn range(&self, from: f64, to: f64) -> Result<Vec<String>, AppError>;

    /// Probes store connectivity for health reporting.
    async fn ping(&self) -> bool;
}
