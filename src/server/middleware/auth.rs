use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::server::error::AppError;

/// Client-facing message when the `token` query parameter is missing.
pub const MISSING_TOKEN_MESSAGE: &str = "Token not provided";

/// Opaque caller-supplied bearer token, forwarded unchanged to the upstream API.
///
/// Only constructed from a non-empty value, so every upstream call is authenticated.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// Validates a raw token value.
    ///
    /// # Returns
    /// - `Ok(BearerToken)` - The value was present and non-empty
    /// - `Err(AppError::BadRequest)` - The value was missing or empty
    pub fn require(value: Option<String>) -> Result<Self, AppError> {
        match value {
            Some(token) if !token.is_empty() => Ok(Self(token)),
            _ => Err(AppError::BadRequest(MISSING_TOKEN_MESSAGE.to_string())),
        }
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

/// Tokens never appear in logs.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Extracts the `token` query parameter, rejecting the request with 400 before any
/// upstream call when it is missing.
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(TokenQuery { token }) = Query::<TokenQuery>::try_from_uri(&parts.uri)?;

        BearerToken::require(token)
    }
}
