//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub access_token: String,
    /// Token scheme for the Authorization header.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Post creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    /// The freshly allocated post id.
    pub post_id: u64,
}

/// Post listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    /// Ids of the caller's posts, oldest first.
    pub post_ids: Vec<u64>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
