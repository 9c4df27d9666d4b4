//! Shared application state injected into every handler.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Cheaply cloneable handle to the services behind the HTTP API.
///
/// There are no process-wide globals: each `AppState` owns its own store, so
/// independent instances (one per test, for example) never share links or
/// code counters.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Landing page served on `GET /`, read from disk on every request.
    pub index_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(link_repository: Arc<dyn LinkRepository>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            index_path: Arc::new(index_path.into()),
        }
    }
}
