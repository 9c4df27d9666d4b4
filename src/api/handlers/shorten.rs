//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the request body cannot be decoded.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Creates a short link valid for 24 hours.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "1", "expires_in": "24 hours" }
/// ```
///
/// # Errors
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// Returns 400 Bad Request with `{"error": "Invalid request"}` if the body is
/// not a JSON object with a string `url`, and with
/// `{"error": "URL cannot be empty"}` if `url` is blank after trimming.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let request: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected shorten request body: {}", e);
        AppError::bad_request(INVALID_REQUEST_MESSAGE)
    })?;

    let link = state.link_service.shorten(&request.url).await?;

    Ok(Json(link.into()))
}
