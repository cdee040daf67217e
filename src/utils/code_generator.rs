//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for caller-supplied codes.

use base64::Engine as _;
use std::borrow::Cow;
use validator::ValidationError;

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest code accepted from callers or configuration.
pub const MIN_CODE_LENGTH: usize = 3;

/// Longest code accepted from callers or configuration.
pub const MAX_CODE_LENGTH: usize = 20;

/// Number of random candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Reserved codes that cannot be used as short links.
///
/// These collide with fixed routes (`/health`, `/api/...`).
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Generates a random lowercase alphanumeric code of exactly `length` characters.
///
/// Draws `length` bytes from the OS entropy source, encodes them as URL-safe
/// base64 without padding and keeps only ASCII alphanumerics, lowercased.
/// Dropping `-` and `_` can leave the candidate short, so more bytes are
/// drawn until the target length is reached.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut code = String::with_capacity(length);

    while code.len() < length {
        let mut buffer = vec![0u8; length];
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
        code.extend(
            encoded
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase()),
        );
    }

    code.truncate(length);
    code
}

/// Canonical form of a caller-supplied code: trimmed and lowercased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Validates a caller-supplied short code.
///
/// Used as a `validator` custom function on request DTOs.
///
/// # Rules
///
/// - Empty string is accepted and treated as "no code" by the service
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits (stored lowercased)
/// - Cannot be a reserved route name
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_code("promo2025").is_ok());
/// assert!(validate_custom_code("ab").is_err());        // Too short
/// assert!(validate_custom_code("my-link").is_err());   // Hyphen
/// assert!(validate_custom_code("Health").is_err());    // Reserved
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Ok(());
    }

    if code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(invalid(
            "short_code_length",
            "Short code must be 3-20 characters",
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid(
            "short_code_charset",
            "Short code can only contain letters and digits",
        ));
    }

    if RESERVED_CODES.contains(&code.to_ascii_lowercase().as_str()) {
        return Err(invalid("short_code_reserved", "This code is reserved"));
    }

    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [MIN_CODE_LENGTH, DEFAULT_CODE_LENGTH, 12, MAX_CODE_LENGTH] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_lowercase_alphanumeric() {
        for _ in 0..500 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_short_lengths_stay_exact() {
        // Small buffers lose characters to stripping most often.
        for _ in 0..2000 {
            assert_eq!(generate_code(MIN_CODE_LENGTH).len(), MIN_CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(12)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_zero_length() {
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  PromoCode "), "promocode");
        assert_eq!(normalize_code("abc"), "abc");
    }

    #[test]
    fn test_validate_empty_is_accepted() {
        assert!(validate_custom_code("").is_ok());
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_custom_code("abc").is_ok());
        assert!(validate_custom_code(&"a".repeat(20)).is_ok());

        let err = validate_custom_code("ab").unwrap_err();
        assert_eq!(err.code, "short_code_length");
        assert!(validate_custom_code(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_mixed_case_is_accepted() {
        assert!(validate_custom_code("MyCode123").is_ok());
    }

    #[test]
    fn test_validate_rejects_non_alphanumeric() {
        for code in ["my-link", "my_link", "my link", "abc!", "héllo"] {
            let err = validate_custom_code(code).unwrap_err();
            assert_eq!(err.code, "short_code_charset", "code {code:?}");
        }
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
        assert!(validate_custom_code("HEALTH").is_err());
    }
}
