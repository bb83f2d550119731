//! Censudex Auth Service
//!
//! Main entry point that wires the crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use censudex_api::{AppState, build_router};
use censudex_auth::{AuthService, HttpDirectoryClient, JwtDecoder, JwtEncoder, MemoryTokenBlocklist};
use censudex_core::config::AppConfig;
use censudex_core::error::AppError;

#[tokio::main]
async fn main() {
    // Missing signing secret or directory URL is the only fatal path.
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CENSUDEX_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Censudex auth service v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    let directory = Arc::new(HttpDirectoryClient::new(&config.directory)?);
    let blocklist = Arc::new(MemoryTokenBlocklist::new());
    let encoder = JwtEncoder::new(&config.auth);
    let decoder = JwtDecoder::new(&config.auth);

    let auth = Arc::new(AuthService::new(directory, encoder, decoder, blocklist));
    let state = AppState::new(Arc::clone(&config), auth);
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

/// Resolves when a shutdown signal is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
