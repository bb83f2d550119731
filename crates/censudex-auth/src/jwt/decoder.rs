//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use censudex_core::config::auth::AuthConfig;
use censudex_core::error::{AppError, ErrorKind};

use super::claims::Claims;

/// Validates session token strings against the configured signing secret.
///
/// Malformed input never panics; every failure comes back as a typed
/// `AppError` whose kind distinguishes signature, expiry, and parse
/// failures while the message stays generic for callers.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Zero tolerance: no clock-skew grace.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning the embedded claims.
    ///
    /// Checks the signature against the configured secret and the `exp`
    /// claim against the clock. A token presented exactly at `exp` is
    /// rejected (jsonwebtoken treats that instant as valid, so it is
    /// re-checked here).
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::with_source(ErrorKind::TokenExpired, "Token inválido.", e)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::with_source(
                        ErrorKind::TokenInvalidSignature,
                        "Token inválido.",
                        e,
                    ),
                    _ => AppError::with_source(ErrorKind::TokenMalformed, "Token inválido.", e),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired() {
            return Err(AppError::token_expired("Token inválido."));
        }

        Ok(claims)
    }
}
