//! Capability trait for the token revocation blocklist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::result::AppResult;

/// Tracks token ids that must be rejected before their natural expiry.
///
/// Implementations own their entry map exclusively and must be safe under
/// concurrent `block`/`is_blocked` calls from many request handlers. Once
/// `block` returns, every `is_blocked` call that starts afterwards observes
/// the token as blocked.
#[async_trait]
pub trait TokenBlocklist: Send + Sync {
    /// Record `jti` as revoked until `expires_at`.
    ///
    /// Idempotent: blocking an already-blocked id simply updates its expiry
    /// (latest write wins). Implementations may skip entries whose expiry
    /// has already passed.
    async fn block(&self, jti: Uuid, expires_at: DateTime<Utc>) -> AppResult<()>;

    /// True iff an entry exists for `jti` and its expiry is still in the
    /// future. Implementations should opportunistically purge expired
    /// entries during this call.
    async fn is_blocked(&self, jti: Uuid) -> AppResult<bool>;
}
