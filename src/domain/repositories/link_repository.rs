//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;

/// Repository interface for the `urls` table, keyed by short code.
///
/// Every method is an `async fn`; dropping the returned future cancels the
/// call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with a click count of zero.
    ///
    /// The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] if the short code is taken.
    /// Returns [`RepositoryError::Database`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, RepositoryError>;

    /// Finds a link by its short code.
    ///
    /// Expired links are returned as well; expiry is decided by the caller.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, RepositoryError>;

    /// Atomically adds one to the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no link has this code.
    async fn increment_clicks(&self, code: &str) -> Result<(), RepositoryError>;

    /// Reports whether any link, expired or not, already uses this code.
    async fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError>;
}
