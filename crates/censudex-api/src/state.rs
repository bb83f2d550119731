//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use censudex_auth::AuthService;
use censudex_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Session flows (login, authorize, logout).
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Assemble the state from its parts.
    pub fn new(config: Arc<AppConfig>, auth: Arc<AuthService>) -> Self {
        Self { config, auth }
    }
}
