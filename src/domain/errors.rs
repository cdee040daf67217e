//! Typed failures raised by the store and the link service.
//!
//! The HTTP boundary maps these variants to status codes in
//! [`crate::error::AppError`]; nothing downstream inspects message text.

/// Errors returned by [`crate::domain::repositories::LinkRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The short code is already taken (unique constraint violation).
    #[error("short code already exists: {0}")]
    Duplicate(String),

    /// No row matched the short code.
    #[error("short code not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors returned by [`crate::application::services::LinkService`].
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("short code not found: {0}")]
    NotFound(String),

    /// The link exists but its expiry is in the past.
    #[error("short link has expired: {0}")]
    Expired(String),

    /// A caller-supplied code is already in use.
    #[error("short code already exists: {0}")]
    CodeExists(String),

    /// Random generation hit an occupied code on every attempt.
    #[error("failed to generate unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
