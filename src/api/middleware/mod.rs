//! HTTP middleware for request processing.
//!
//! Provides request tracing and CORS.

pub mod cors;
pub mod tracing;
