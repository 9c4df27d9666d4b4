//! Link creation and resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{LINK_TTL_LABEL, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Message returned when the submitted URL is blank.
pub const EMPTY_URL_MESSAGE: &str = "URL cannot be empty";

/// Message returned for unknown and expired codes alike.
pub const NOT_FOUND_MESSAGE: &str = "URL not found or expired";

/// Service for creating and resolving short links.
///
/// This is the trust boundary for input: URLs are trimmed and rejected when
/// blank here, while the repository stores whatever it is given.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens `raw_url` after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty after trimming.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(AppError::bad_request(EMPTY_URL_MESSAGE));
        }

        let code = self.link_repository.insert(url).await;
        metrics::counter!("links_created_total").increment(1);
        debug!(code = %code, "Created short link");

        Ok(ShortLink {
            code,
            expires_in: LINK_TTL_LABEL,
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued or its
    /// link has expired. The two cases are deliberately indistinguishable.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let url = self
            .link_repository
            .lookup(code)
            .await
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        metrics::counter!("redirects_total").increment(1);
        Ok(url)
    }

    /// Number of links currently held by the repository.
    pub async fn stored_links(&self) -> usize {
        self.link_repository.count().await
    }
}
