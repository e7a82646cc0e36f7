//! Auth DTOs shared between the backend contract and the client

use serde::{Deserialize, Serialize};

use crate::models::User;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}
