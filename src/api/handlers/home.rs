//! Handler for the landing page.

use axum::{extract::State, response::Html};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Serves the landing page from disk.
///
/// # Endpoint
///
/// `GET /`
///
/// The file is read on every request, so it can be edited without a restart.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the file cannot be read. This is the
/// only failure with an operational cause, so it is the only one logged.
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            error!(
                path = %state.index_path.display(),
                "Error reading landing page: {}",
                e
            );
            Err(AppError::internal("Could not load page"))
        }
    }
}
