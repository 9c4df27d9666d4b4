//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

/// How long a link stays resolvable after it is created, in hours.
pub const LINK_TTL: i64 = 24;

/// Human-readable form of [`LINK_TTL`] returned by the shorten endpoint.
pub const LINK_TTL_LABEL: &str = "24 hours";

/// Returns [`LINK_TTL`] as a [`Duration`].
pub fn link_ttl() -> Duration {
    Duration::hours(LINK_TTL)
}

/// A stored short link.
///
/// Links are immutable once created. The short code is the key the link is
/// stored under and is not duplicated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            created_at,
        }
    }

    /// Time elapsed between creation and `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Returns true once the link is strictly older than `ttl`.
    ///
    /// An age exactly equal to `ttl` is still live. Both lazy expiry on
    /// lookup and the background sweep go through this check.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}

/// Outcome of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub expires_in: &'static str,
}
