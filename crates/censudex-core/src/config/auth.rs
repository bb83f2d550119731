//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Token issuance and verification configuration.
///
/// The signing secret has **no default**: the process refuses to start
/// without one. Rotating the secret invalidates every previously issued
/// token (there is no key versioning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required.
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

fn default_token_ttl() -> u64 {
    60
}
