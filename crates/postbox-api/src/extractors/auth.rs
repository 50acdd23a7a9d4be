//! `AuthUser` extractor — pulls the session token from the Authorization
//! header, verifies it, and injects the authenticated username.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use postbox_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The verified token subject.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let username = state.tokens.verify(token)?;

        // A cryptographically valid token for an unknown subject is rejected
        // with the same opaque error as any other token failure.
        if !state.directory.exists(&username) {
            return Err(AppError::unauthorized("Invalid token").into());
        }

        Ok(AuthUser { username })
    }
}
