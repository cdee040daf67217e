//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Typed failures of the store and service layers
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! define contracts implemented by the infrastructure layer, and business
//! logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::{LinkError, RepositoryError};
