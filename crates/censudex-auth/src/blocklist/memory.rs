//! In-memory revocation blocklist backed by a concurrent map.
//!
//! Suitable for single-instance deployments: entries do not survive a
//! restart and are not shared across processes. Expired entries are purged
//! lazily during reads, which amortizes the cleanup cost over request
//! traffic instead of requiring a background sweep task.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use censudex_core::result::AppResult;
use censudex_core::traits::blocklist::TokenBlocklist;

/// Concurrent map of revoked token ids to their natural expiry.
#[derive(Debug, Default)]
pub struct MemoryTokenBlocklist {
    blocked: DashMap<Uuid, DateTime<Utc>>,
}

impl MemoryTokenBlocklist {
    /// Create an empty blocklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry whose expiry has passed. O(n) over blocked
    /// entries, which is bounded by the number of live sessions.
    fn purge_expired(&self) {
        let now = Utc::now();
        self.blocked.retain(|_, expires_at| *expires_at > now);
    }

    /// Current number of blocked entries (expired ones included until the
    /// next purge).
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// True when no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

#[async_trait]
impl TokenBlocklist for MemoryTokenBlocklist {
    async fn block(&self, jti: Uuid, expires_at: DateTime<Utc>) -> AppResult<()> {
        if expires_at <= Utc::now() {
            // Already expired; storing it would only be wasted memory.
            debug!(%jti, "Skipping blocklist insert for expired token");
            return Ok(());
        }
        self.blocked.insert(jti, expires_at);
        Ok(())
    }

    async fn is_blocked(&self, jti: Uuid) -> AppResult<bool> {
        self.purge_expired();

        match self.blocked.get(&jti) {
            Some(entry) => Ok(*entry.value() > Utc::now()),
            None => Ok(false),
        }
    }
}
