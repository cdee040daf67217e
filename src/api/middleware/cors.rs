//! Cross-origin policy for browser clients.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call `GET`, `POST` and `OPTIONS` with any headers.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
