//! `BearerToken` extractor for the Authorization header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use censudex_core::error::AppError;

use crate::error::ApiError;

/// The raw bearer token string from the `Authorization` header.
///
/// Extraction does not validate the token; handlers decide whether a full
/// authorize (signature + expiry + revocation) or a bare decode is needed.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::token_malformed("Token inválido.")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError(AppError::token_malformed("Token inválido.")))?;

        Ok(BearerToken(token.to_string()))
    }
}
