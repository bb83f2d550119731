//! Auth handlers: login, validate-token, logout.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use censudex_core::error::AppError;
use censudex_core::types::credential::Credential;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, ValidateTokenResponse};
use crate::error::ApiError;
use crate::extractors::BearerToken;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let credential = Credential::new(req.identifier, req.secret);
    let token = state.auth.login(&credential).await?;

    Ok(Json(ApiResponse::ok(LoginResponse { token })))
}

/// GET /auth/validate-token
pub async fn validate_token(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<ApiResponse<ValidateTokenResponse>>, ApiError> {
    let claims = state.auth.authorize(&token).await?;

    Ok(Json(ApiResponse::ok(ValidateTokenResponse {
        user_id: claims.sub,
        role: claims.role,
    })))
}

/// POST /auth/logout
///
/// Revocation is keyed on the token's own claims, so the token only needs
/// to verify cryptographically. An already-revoked token can be logged
/// out again without error.
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let claims = state.auth.decode(&token)?;
    state.auth.logout(&claims).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Sesión cerrada con éxito.".to_string(),
    })))
}
