//! URL normalization and validation utilities.
//!
//! [`normalize_url`] only guarantees a scheme prefix on stored URLs. Rejecting
//! malformed input is the job of [`check_target_url`], which request DTOs run
//! through `validator`.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Scheme prepended to URLs that arrive without one.
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Ensures the URL carries an `http://` or `https://` prefix.
///
/// Surrounding whitespace is trimmed. Input without one of the two prefixes
/// gets `https://` prepended; nothing else is rewritten.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com/page"), "https://example.com/page");
/// assert_eq!(normalize_url(" http://a.com "), "http://a.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

/// Checks that the input will normalize to an absolute HTTP(S) URL with a host.
///
/// Input without a scheme is checked as if `https://` had been prepended, so
/// `example.com/page` is accepted. Any scheme other than HTTP(S) is rejected.
///
/// # Errors
///
/// Returns [`UrlValidationError`] describing the first problem found.
pub fn check_target_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let candidate: Cow<'_, str> = if has_http_scheme(trimmed) {
        Cow::Borrowed(trimmed)
    } else if trimmed.contains("://") {
        return Err(UrlValidationError::UnsupportedProtocol);
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"))
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// `validator` adapter for [`check_target_url`].
pub fn validate_target_url(input: &str) -> Result<(), ValidationError> {
    check_target_url(input).map(|_| ()).map_err(|e| {
        ValidationError::new("url").with_message(Cow::Owned(e.to_string()))
    })
}

/// Scheme detection is ASCII case-insensitive; the text itself is kept as-is.
fn has_http_scheme(input: &str) -> bool {
    let starts_with = |prefix: &str| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };

    starts_with("http://") || starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_https_scheme() {
        assert_eq!(normalize_url("example.com/page"), "https://example.com/page");
        assert_eq!(normalize_url("localhost:3000"), "https://localhost:3000");
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com/a?b=c#d"),
            "https://example.com/a?b=c#d"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_url("  example.com \n"), "https://example.com");
        assert_eq!(normalize_url("\thttps://a.com "), "https://a.com");
    }

    #[test]
    fn test_normalize_preserves_case_and_port() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM:443/Path"),
            "HTTPS://EXAMPLE.COM:443/Path"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_url("example.com/x");
        assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn test_check_accepts_absolute_urls() {
        assert!(check_target_url("https://example.com").is_ok());
        assert!(check_target_url("http://192.168.1.1:8080/api").is_ok());
        assert!(check_target_url("https://example.com/search?q=rust#top").is_ok());
    }

    #[test]
    fn test_check_accepts_scheme_less_host() {
        let url = check_target_url("example.com/page").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_check_rejects_empty() {
        assert!(matches!(
            check_target_url("   "),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_check_rejects_other_schemes() {
        for input in ["ftp://example.com/file.txt", "file:///etc/passwd"] {
            assert!(
                matches!(
                    check_target_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_check_rejects_garbage() {
        assert!(matches!(
            check_target_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(check_target_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_check_rejects_missing_host() {
        assert!(check_target_url("https://").is_err());
    }

    #[test]
    fn test_validate_target_url_message() {
        let err = validate_target_url("ftp://example.com").unwrap_err();
        assert_eq!(err.code, "url");
        assert_eq!(
            err.message.as_deref(),
            Some("Only HTTP and HTTPS protocols are allowed")
        );
    }
}
