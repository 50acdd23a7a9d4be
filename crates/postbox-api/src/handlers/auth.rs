//! Auth handlers — signup and login.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use postbox_core::error::AppError;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.directory.register(&req.username, &req.password)?;
    info!(username = %req.username, "New user signed up");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User registered successfully".to_string(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.directory.authenticate(&req.username, &req.password)?;
    let issued = state.tokens.issue(&req.username)?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: issued.token,
        token_type: "bearer".to_string(),
        expires_at: issued.expires_at,
    })))
}
