//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_normalizer`] - URL normalization and validation
//! - [`detached`] - Fire-and-forget task spawning
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod detached;
pub mod url_normalizer;
