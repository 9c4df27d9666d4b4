//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page
//! - `GET  /health`       - Health check
//! - `POST /api/shorten`  - Create a short link
//! - `GET  /{code}`       - Short link redirect
//!
//! Static routes take precedence over `/{code}`, and issued codes are purely
//! numeric, so `health` never shadows a link.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, applied in
//!   [`crate::server::run`] because it must wrap the router

use crate::api;
use crate::api::handlers::{health_handler, home_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}
