//! The login / authorize / logout flows.

use std::sync::Arc;

use tracing::{info, warn};

use censudex_core::error::AppError;
use censudex_core::result::AppResult;
use censudex_core::traits::blocklist::TokenBlocklist;
use censudex_core::traits::directory::DirectoryClient;
use censudex_core::types::credential::Credential;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};

/// Orchestrates the end-to-end session flows.
///
/// Login composes the directory verifier with the token encoder; request
/// validation and logout compose the decoder with the revocation blocklist.
/// Once a token is expired or revoked no flow makes it valid again.
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn DirectoryClient>,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    blocklist: Arc<dyn TokenBlocklist>,
}

impl AuthService {
    /// Wire up the service from its collaborators.
    pub fn new(
        directory: Arc<dyn DirectoryClient>,
        encoder: JwtEncoder,
        decoder: JwtDecoder,
        blocklist: Arc<dyn TokenBlocklist>,
    ) -> Self {
        Self {
            directory,
            encoder,
            decoder,
            blocklist,
        }
    }

    /// Authenticate a credential and mint a session token.
    ///
    /// Directory failures propagate with their generic user-facing messages;
    /// the caller cannot distinguish a wrong password from an unknown user.
    pub async fn login(&self, credential: &Credential) -> AppResult<String> {
        let record = self.directory.verify_credentials(credential).await?;
        let token = self.encoder.issue(record.id, &record.role.to_string())?;

        info!(subject = %record.id, "Session token issued");
        Ok(token)
    }

    /// Validate a bearer token for a protected request.
    ///
    /// Checks signature and expiry via the decoder, requires a `jti`, then
    /// consults the blocklist. Returns the claims on success.
    pub async fn authorize(&self, token: &str) -> AppResult<Claims> {
        let claims = self.decoder.decode(token)?;

        let jti = claims
            .jti
            .ok_or_else(|| AppError::token_malformed("Token inválido."))?;

        if self.blocklist.is_blocked(jti).await? {
            return Err(AppError::token_revoked("Token bloqueado o sesión cerrada."));
        }

        Ok(claims)
    }

    /// Signature and expiry check without the revocation lookup.
    ///
    /// Used by logout, which must accept a token that is being revoked (or
    /// already revoked) as long as it still verifies cryptographically.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        self.decoder.decode(token)
    }

    /// Revoke a previously validated token.
    ///
    /// Best-effort: when the expiry claim cannot be represented as a
    /// timestamp the revocation is skipped and logout still succeeds, since
    /// the token expires on its own. A missing `jti` is the caller's error.
    pub async fn logout(&self, claims: &Claims) -> AppResult<()> {
        let jti = claims.jti.ok_or_else(|| {
            AppError::validation("Token no contiene un identificador único.")
        })?;

        match claims.expires_at() {
            Some(expires_at) => {
                self.blocklist.block(jti, expires_at).await?;
                info!(%jti, "Session token revoked");
            }
            None => {
                warn!(%jti, "Token expiry not representable; skipping revocation");
            }
        }

        Ok(())
    }
}
