//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email or username.
    #[validate(length(min = 1, message = "El identificador es obligatorio."))]
    pub identifier: String,
    /// Password.
    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub secret: String,
}
