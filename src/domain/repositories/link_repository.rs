//! Repository trait for short link storage.

use async_trait::async_trait;
use chrono::Duration;

/// Keyed store of short links with time-based expiry.
///
/// All operations are total: they cannot fail on valid in-memory state, so
/// none of them return a `Result`.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `url` under a freshly issued code and returns that code.
    ///
    /// The URL is stored verbatim; callers validate it beforehand.
    async fn insert(&self, url: &str) -> String;

    /// Resolves a code to its original URL.
    ///
    /// Returns `None` both for codes that were never issued and for links
    /// that have expired. An expired link is removed as part of the call.
    async fn lookup(&self, code: &str) -> Option<String>;

    /// Removes every link older than `threshold` and returns how many were
    /// removed.
    async fn sweep(&self, threshold: Duration) -> usize;

    /// Number of stored links, including expired ones not yet removed.
    async fn count(&self) -> usize;
}
