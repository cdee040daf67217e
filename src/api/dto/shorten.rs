//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_normalizer::validate_target_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A missing scheme is filled in with `https://`.
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    /// Optional caller-chosen code. An empty string means "generate one".
    #[validate(custom(function = "validate_custom_code"))]
    pub short_code: Option<String>,

    /// Optional expiry timestamp (RFC 3339). After this time the link returns 404.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Created link as returned by `POST /api/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            short_code: link.short_code,
            short_url,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}
