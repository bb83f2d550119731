//! Login credential submitted by a caller.

use std::fmt;

/// An identifier/password pair as submitted on login.
///
/// Transient: never persisted and never logged. The `Debug` impl redacts
/// the secret so the struct can appear in trace output safely.
#[derive(Clone)]
pub struct Credential {
    /// Email or username; disambiguated by the presence of `@`.
    pub identifier: String,
    /// The password. Verified only by the external directory.
    pub secret: String,
}

impl Credential {
    /// Create a credential from caller-supplied parts.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// True when the identifier looks like an email address.
    pub fn is_email(&self) -> bool {
        self.identifier.contains('@')
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
