//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::application::services::ShortenInput;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "example.com/page",
///   "short_code": "promo",                 // optional
///   "expires_at": "2030-01-01T00:00:00Z"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "promo",
///   "short_url": "http://localhost:8080/promo",
///   "original_url": "https://example.com/page",
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": "2030-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on malformed JSON or validation failure
/// - 409 Conflict if the requested code is taken
/// - 500 Internal Server Error on store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .link_service
        .shorten(ShortenInput {
            url: payload.url,
            short_code: payload.short_code,
            expires_at: payload.expires_at,
        })
        .await?;

    let short_url = state.link_service.short_url(&link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::new(link, short_url)),
    ))
}
