//! PostgreSQL persistence.
//!
//! - [`PgLinkRepository`] - Short link storage and retrieval
//! - [`pool`] - Connection pool construction from [`crate::config::Config`]
//! - [`schema`] - Migration runner and schema verification

pub mod pg_link_repository;
pub mod pool;
pub mod schema;

pub use pg_link_repository::PgLinkRepository;
