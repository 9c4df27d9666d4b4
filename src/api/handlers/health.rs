//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The in-memory store cannot become unavailable, so the service is healthy
/// whenever it answers. The store check reports how many links are held,
/// including expired ones the sweeper has not yet removed.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "3 stored link(s)" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stored = state.link_service.stored_links().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{} stored link(s)", stored)),
            },
        },
    })
}
