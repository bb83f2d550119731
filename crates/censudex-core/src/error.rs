//! Unified application error types for the Censudex auth service.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// The token and credential kinds mirror the failure taxonomy of the auth
/// core: they are all surfaced to callers as a generic unauthorized response
/// but stay distinguishable in internal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The external directory rejected the submitted credentials.
    CredentialRejected,
    /// The directory knows the account but it is inactive (or the record
    /// could not be read).
    AccountInactive,
    /// A token's signature did not verify against the configured secret.
    TokenInvalidSignature,
    /// A token's expiry has passed.
    TokenExpired,
    /// A token could not be parsed or is missing required claims.
    TokenMalformed,
    /// A token was revoked before its natural expiry (logout).
    TokenRevoked,
    /// The external directory could not be reached (network/timeout).
    DirectoryUnreachable,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredentialRejected => write!(f, "CREDENTIAL_REJECTED"),
            Self::AccountInactive => write!(f, "ACCOUNT_INACTIVE"),
            Self::TokenInvalidSignature => write!(f, "TOKEN_INVALID_SIGNATURE"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::TokenMalformed => write!(f, "TOKEN_MALFORMED"),
            Self::TokenRevoked => write!(f, "TOKEN_REVOKED"),
            Self::DirectoryUnreachable => write!(f, "DIRECTORY_UNREACHABLE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout the auth service.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a credential-rejected error.
    pub fn credential_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialRejected, message)
    }

    /// Create an account-inactive error.
    pub fn account_inactive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccountInactive, message)
    }

    /// Create an invalid-signature token error.
    pub fn token_invalid_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenInvalidSignature, message)
    }

    /// Create an expired token error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create a malformed token error.
    pub fn token_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenMalformed, message)
    }

    /// Create a revoked token error.
    pub fn token_revoked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenRevoked, message)
    }

    /// Create a directory-unreachable error.
    pub fn directory_unreachable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DirectoryUnreachable, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// True for every kind that must surface as an unauthorized response.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialRejected
                | ErrorKind::AccountInactive
                | ErrorKind::TokenInvalidSignature
                | ErrorKind::TokenExpired
                | ErrorKind::TokenMalformed
                | ErrorKind::TokenRevoked
                | ErrorKind::DirectoryUnreachable
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
