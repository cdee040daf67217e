//! Handler for link statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::api::extract::ShortCodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record of a short link with its click count.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Reading stats does not count as a click.
///
/// # Errors
///
/// - 400 Bad Request if the code is blank or not valid UTF-8
/// - 404 Not Found if the code is unknown or the link has expired
pub async fn stats_handler(
    State(state): State<AppState>,
    ShortCodePath(code): ShortCodePath,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;

    Ok(Json(StatsResponse::from(link)))
}
