//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer against PostgreSQL.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository, pool and schema setup

pub mod persistence;
