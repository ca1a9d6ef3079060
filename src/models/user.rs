//! User, session and auth request types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::Role;

/// Login request body
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body; role defaults to customer
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub role: Role,
}

/// Authenticated user as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

/// Response to login and registration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: AuthUser,
}

/// Persisted client session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn from_auth(response: &AuthResponse) -> Self {
        Self {
            token: response.access_token.clone(),
            role: response.user.role,
            username: response.user.username.clone(),
        }
    }
}
