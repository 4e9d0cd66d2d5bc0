//! Authentication models

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/authenticate`
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Login response; only the bearer token is used
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
}
