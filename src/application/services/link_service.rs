//! Shorten, lookup and stats service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::{LinkError, RepositoryError};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, MAX_GENERATION_ATTEMPTS, generate_code, normalize_code,
};
use crate::utils::detached::spawn_detached;
use crate::utils::url_normalizer::normalize_url;

/// Settings read once from configuration and handed to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    /// Public origin used to build short URLs, e.g. `https://sho.rt`.
    pub base_url: String,
    /// Length of generated codes.
    pub code_length: usize,
}

impl LinkSettings {
    pub fn new(base_url: impl Into<String>, code_length: usize) -> Self {
        Self {
            base_url: base_url.into(),
            code_length,
        }
    }
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self::new("http://localhost:8080", DEFAULT_CODE_LENGTH)
    }
}

/// Input of [`LinkService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenInput {
    pub url: String,
    /// Caller-chosen code; `None` or blank means "generate one".
    pub short_code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Service for creating short links, resolving them and reading their stats.
///
/// Handles URL normalization, code generation with collision retry and the
/// detached click counter update on lookup.
pub struct LinkService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    settings: LinkSettings,
}

impl<L: LinkRepository + ?Sized + 'static> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>, settings: LinkSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    /// Creates a short link.
    ///
    /// # Code Resolution
    ///
    /// - A caller-supplied code is trimmed, lowercased and checked for existence
    /// - Otherwise a random code of the configured length is generated,
    ///   retrying up to 10 times on collision
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CodeExists`] if the caller's code is taken (no write
    /// is performed) or a concurrent insert claimed it first.
    /// Returns [`LinkError::GenerationExhausted`] if every candidate collided.
    /// Returns [`LinkError::Repository`] on store failures.
    pub async fn shorten(&self, input: ShortenInput) -> Result<ShortLink, LinkError> {
        let original_url = normalize_url(&input.url);

        let custom_code = input
            .short_code
            .as_deref()
            .map(normalize_code)
            .filter(|code| !code.is_empty());

        let short_code = match custom_code {
            Some(code) => self.claim_custom_code(code).await?,
            None => self.generate_unique_code().await?,
        };

        let new_link = NewShortLink {
            original_url,
            short_code,
            expires_at: input.expires_at,
        };

        let link = self
            .repository
            .create(new_link)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(code) => LinkError::CodeExists(code),
                other => LinkError::Repository(other),
            })?;

        info!(
            short_code = %link.short_code,
            original_url = %link.original_url,
            "Short link created"
        );

        Ok(link)
    }

    /// Resolves a code to its original URL and counts the visit.
    ///
    /// The click increment runs as a detached task: the URL is returned without
    /// waiting for it, and its failure is never reported.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] or [`LinkError::Expired`] when the link
    /// is unavailable, [`LinkError::Repository`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<String, LinkError> {
        let link = self.find_active(code).await?;

        let repository = Arc::clone(&self.repository);
        let short_code = link.short_code.clone();
        spawn_detached(async move { repository.increment_clicks(&short_code).await });

        Ok(link.original_url)
    }

    /// Returns the stored link, including its click count, without side effects.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn stats(&self, code: &str) -> Result<ShortLink, LinkError> {
        self.find_active(code).await
    }

    async fn find_active(&self, code: &str) -> Result<ShortLink, LinkError> {
        let code = normalize_code(code);

        let link = self
            .repository
            .find_by_code(&code)
            .await?
            .ok_or_else(|| LinkError::NotFound(code.clone()))?;

        if link.is_expired() {
            debug!(short_code = %code, "Short link has expired");
            return Err(LinkError::Expired(code));
        }

        Ok(link)
    }

    async fn claim_custom_code(&self, code: String) -> Result<String, LinkError> {
        if self.repository.exists_by_code(&code).await? {
            warn!(short_code = %code, "Requested short code is already taken");
            return Err(LinkError::CodeExists(code));
        }

        Ok(code)
    }

    /// Generates a code that is free at the time of the check.
    async fn generate_unique_code(&self) -> Result<String, LinkError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.settings.code_length);

            if !self.repository.exists_by_code(&code).await? {
                return Ok(code);
            }

            debug!(attempt, short_code = %code, "Generated short code collided");
        }

        Err(LinkError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
