//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link with its click counter.
///
/// Every field except `click_count` is fixed at creation. Expiry is soft:
/// an expired link keeps its row and its code stays taken.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link expired strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new short link.
///
/// `original_url` is expected to be normalized and `short_code` lowercased
/// before this reaches the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
