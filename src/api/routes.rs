//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link valid for 24 hours
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
