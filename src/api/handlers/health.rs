//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns 200 while the process is serving requests; it does not
/// touch the store.
///
/// ```json
/// {
///   "status": "ok",
///   "message": "Service is running",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
