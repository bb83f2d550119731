//! Client record as returned by the external directory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The directory's view of a client account.
///
/// Owned by the external directory service; the auth core treats it as
/// read-only input and never writes it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Stable unique identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Role level (0 = regular client, 1 = administrator).
    pub role: i32,
    /// Whether the account may authenticate.
    #[serde(alias = "isActive", alias = "is_active")]
    pub active: bool,
}
