//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Request to shorten a single URL.
///
/// A missing `url` field is treated like an empty one and rejected by the
/// service, not by deserialization. `URL` is accepted as the field name too.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default, alias = "URL")]
    pub url: String,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub expires_in: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_code: link.code,
            expires_in: link.expires_in.to_string(),
        }
    }
}
