//! # Ephemeral Shortener
//!
//! An in-memory URL shortening service built with Axum. Links are issued
//! sequential numeric codes and expire 24 hours after creation.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, clock, code allocator,
//!   repository trait and the background expiry sweeper
//! - **Application Layer** ([`application`]) - Input validation and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The mutex-guarded in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Expiry
//!
//! A link is live while its age is at most 24 hours. Expired links are
//! removed on the first lookup that finds them, and once an hour by the
//! sweeper for links nobody asks for again. Nothing survives a restart.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:8080/api/shorten -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Metrics
//!
//! Counters are emitted through the [`metrics`] facade:
//! `links_created_total`, `redirects_total` and `links_expired_total`. No
//! recorder is installed by this crate, so they are discarded unless the
//! embedding process installs one (for example a Prometheus exporter)
//! before calling [`server::run`].
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Link, ShortLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
