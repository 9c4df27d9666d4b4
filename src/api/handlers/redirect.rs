//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The bare `/` path is served by [`super::home_handler`] instead.
///
/// # Response
///
/// 302 Found with the original URL in `Location`. The stored URL is used
/// verbatim.
///
/// # Errors
///
/// Returns 404 Not Found if the code was never issued or has expired; the
/// response is identical in both cases.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
