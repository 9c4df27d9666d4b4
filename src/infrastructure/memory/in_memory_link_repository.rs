//! Process-local implementation of [`LinkRepository`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Duration;
use tracing::debug;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, link_ttl};
use crate::domain::repositories::LinkRepository;

/// State guarded by the repository's single lock.
///
/// The counter and the map are one unit: a code is issued and its link
/// inserted within the same critical section. Splitting them into separate
/// locks would break the uniqueness guarantee of issued codes.
#[derive(Debug, Default)]
struct Inner {
    links: HashMap<String, Link>,
    allocator: CodeAllocator,
}

/// In-memory link store with lazy and sweep-based expiry.
///
/// Every operation takes the whole-structure lock for its own duration and
/// never holds it across an `.await`. Insert and lookup are O(1); sweep is
/// linear in the number of stored links.
pub struct InMemoryLinkRepository {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl InMemoryLinkRepository {
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            clock,
            ttl: link_ttl(),
        }
    }

    /// Stores `url` under the next code from the allocator.
    pub fn insert_link(&self, url: &str) -> String {
        let mut inner = self.lock();
        let code = inner.allocator.next_code();
        let link = Link::new(url.to_string(), self.clock.now());
        inner.links.insert(code.clone(), link);
        code
    }

    /// Resolves `code`, dropping the link if it has outlived the TTL.
    pub fn lookup_link(&self, code: &str) -> Option<String> {
        let mut inner = self.lock();
        let now = self.clock.now();

        let expired = inner.links.get(code)?.is_expired(now, self.ttl);
        if expired {
            inner.links.remove(code);
            debug!(code, "Removed expired link on lookup");
            return None;
        }

        inner.links.get(code).map(|link| link.original_url.clone())
    }

    /// Removes every link older than `threshold`.
    pub fn sweep_links(&self, threshold: Duration) -> usize {
        let mut inner = self.lock();
        let now = self.clock.now();

        let before = inner.links.len();
        inner.links.retain(|_, link| !link.is_expired(now, threshold));
        before - inner.links.len()
    }

    /// Number of links currently held, live or not.
    pub fn len(&self) -> usize {
        self.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation leaves `Inner` consistent, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, url: &str) -> String {
        self.insert_link(url)
    }

    async fn lookup(&self, code: &str) -> Option<String> {
        self.lookup_link(code)
    }

    async fn sweep(&self, threshold: Duration) -> usize {
        self.sweep_links(threshold)
    }

    async fn count(&self) -> usize {
        self.len()
    }
}
