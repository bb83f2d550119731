//! Shared test helpers for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use censudex_api::{AppState, build_router};
use censudex_auth::{AuthService, JwtDecoder, JwtEncoder, MemoryTokenBlocklist};
use censudex_core::config::AppConfig;
use censudex_core::config::auth::AuthConfig;
use censudex_core::config::directory::DirectoryConfig;
use censudex_core::config::logging::LoggingConfig;
use censudex_core::config::server::ServerConfig;
use censudex_core::error::AppError;
use censudex_core::result::AppResult;
use censudex_core::traits::directory::DirectoryClient;
use censudex_core::types::client::ClientRecord;
use censudex_core::types::credential::Credential;

/// Directory stand-in resolving identifiers from a fixed record set.
pub struct StubDirectory {
    records: Vec<ClientRecord>,
}

#[async_trait]
impl DirectoryClient for StubDirectory {
    async fn verify_credentials(&self, credential: &Credential) -> AppResult<ClientRecord> {
        let record = self
            .records
            .iter()
            .find(|r| r.email == credential.identifier || r.username == credential.identifier)
            .ok_or_else(|| AppError::credential_rejected("Usuario no encontrado."))?;

        if !record.active {
            return Err(AppError::account_inactive("Usuario inactivo o no encontrado."));
        }

        Ok(record.clone())
    }
}

/// A captured HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application backed by the given directory records.
    pub fn new(records: Vec<ClientRecord>) -> Self {
        let config = Arc::new(AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                token_ttl_minutes: 60,
            },
            directory: DirectoryConfig {
                base_url: "http://directory.invalid".to_string(),
                timeout_seconds: 5,
            },
            logging: LoggingConfig::default(),
        });

        let auth = Arc::new(AuthService::new(
            Arc::new(StubDirectory { records }),
            JwtEncoder::new(&config.auth),
            JwtDecoder::new(&config.auth),
            Arc::new(MemoryTokenBlocklist::new()),
        ));

        let state = AppState::new(config, auth);
        Self {
            router: build_router(state),
        }
    }

    /// An active admin record for the common test fixture.
    pub fn admin_record(id: Uuid) -> ClientRecord {
        ClientRecord {
            id,
            email: "admin@x.cl".to_string(),
            username: "admin".to_string(),
            role: 1,
            active: true,
        }
    }

    /// Issue a request against the router and collect the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Log in and return the issued token.
    pub async fn login(&self, identifier: &str, secret: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({
                    "identifier": identifier,
                    "secret": secret,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["token"].as_str().unwrap().to_string()
    }
}
