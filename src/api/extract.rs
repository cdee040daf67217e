//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// Both malformed JSON and failed validation are rejected with
/// [`AppError::Validation`], so clients always receive the JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Short code taken from the `{code}` path segment, trimmed and non-empty.
///
/// Undecodable segments (e.g. invalid UTF-8) and blank codes are rejected
/// with [`AppError::Validation`].
#[derive(Debug, Clone)]
pub struct ShortCodePath(pub String);

impl<S> FromRequestParts<S> for ShortCodePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(code) = Path::<String>::from_request_parts(parts, state).await?;

        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(AppError::bad_request(
                "Short code is required",
                json!({ "field": "short_code" }),
            ));
        }

        Ok(ShortCodePath(trimmed.to_string()))
    }
}
