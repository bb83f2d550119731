//! HTTP client for the external clients directory.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

use censudex_core::config::directory::DirectoryConfig;
use censudex_core::error::{AppError, ErrorKind};
use censudex_core::result::AppResult;
use censudex_core::traits::directory::DirectoryClient;
use censudex_core::types::client::ClientRecord;
use censudex_core::types::credential::Credential;

/// Outbound credential-check payload. Exactly one of `email`/`username`
/// is set, depending on the shape of the submitted identifier.
#[derive(Debug, Serialize)]
struct CredentialPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    password: &'a str,
}

/// Reqwest-backed [`DirectoryClient`] talking to the clients service.
///
/// The directory owns password verification; this client only normalizes
/// the lookup key and interprets the response. Every call is bounded by
/// the configured timeout so a slow directory cannot stall a login
/// indefinitely, and a dropped caller simply abandons the in-flight
/// request without side effects.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryClient {
    /// Build a client from directory configuration.
    pub fn new(config: &DirectoryConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn verify_credentials(&self, credential: &Credential) -> AppResult<ClientRecord> {
        let payload = if credential.is_email() {
            CredentialPayload {
                email: Some(&credential.identifier),
                username: None,
                password: &credential.secret,
            }
        } else {
            CredentialPayload {
                email: None,
                username: Some(&credential.identifier),
                password: &credential.secret,
            }
        };

        let url = format!("{}/clients/credentials", self.base_url);
        let response = self.http.post(&url).json(&payload).send().await.map_err(|e| {
            warn!(error = %e, "Directory service unreachable");
            AppError::with_source(ErrorKind::DirectoryUnreachable, "Usuario no encontrado.", e)
        })?;

        if !response.status().is_success() {
            return Err(AppError::credential_rejected("Usuario no encontrado."));
        }

        let record: ClientRecord = response
            .json()
            .await
            .map_err(|_| AppError::account_inactive("Usuario inactivo o no encontrado."))?;

        if !record.active {
            return Err(AppError::account_inactive("Usuario inactivo o no encontrado."));
        }

        Ok(record)
    }
}
