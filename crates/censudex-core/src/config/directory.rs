//! External credential directory configuration.

use serde::{Deserialize, Serialize};

/// Settings for the outbound connection to the clients directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the directory service. Required.
    pub base_url: String,
    /// Request timeout in seconds for the credential-check call.
    /// Bounds the only suspension point in the login flow.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    10
}
