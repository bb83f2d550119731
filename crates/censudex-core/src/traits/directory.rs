//! Capability trait for the external credential directory.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::client::ClientRecord;
use crate::types::credential::Credential;

/// Verifies credentials against the system of record for client accounts.
///
/// The directory is the sole arbiter of whether credentials are correct;
/// implementations never compare passwords themselves. Any implementation
/// (real HTTP client, stub, mock) satisfying this contract is substitutable,
/// which keeps the login flow testable without a live directory.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Turn a credential into the matching active client record.
    ///
    /// Failure kinds: `CredentialRejected` when the directory answers
    /// non-2xx, `AccountInactive` when the record is inactive or unreadable,
    /// `DirectoryUnreachable` on transport errors or timeout.
    async fn verify_credentials(&self, credential: &Credential) -> AppResult<ClientRecord>;
}
