//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /stats/{code}`  - Click count and metadata for a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
}
