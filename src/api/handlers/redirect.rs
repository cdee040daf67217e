//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::ShortCodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently` and a `Location` header. The click
/// counter is bumped in the background and may lag behind the redirect.
///
/// # Errors
///
/// - 400 Bad Request if the code is blank or not valid UTF-8
/// - 404 Not Found if the code is unknown or the link has expired
pub async fn redirect_handler(
    ShortCodePath(code): ShortCodePath,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve(&code).await?;

    // Redirect::permanent sends 308
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    ))
}
