//! Post handlers — create, list, delete.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::CreatePostRequest;
use crate::dto::response::{ApiResponse, MessageResponse, PostCreatedResponse, PostListResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<Json<ApiResponse<PostCreatedResponse>>> {
    let post_id = state.posts.create(&auth.username, &req.content)?;

    Ok(Json(ApiResponse::ok(PostCreatedResponse { post_id })))
}

/// GET /api/posts
///
/// Serves from the per-user listing cache. Inside the cache TTL the listing
/// is a point-in-time snapshot and does not reflect posts added or deleted
/// since it was cached.
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<PostListResponse>>> {
    let post_ids = state
        .post_cache
        .get_or_compute(&auth.username, || state.posts.ids_for_owner(&auth.username));

    Ok(Json(ApiResponse::ok(PostListResponse { post_ids })))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<u64>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.posts.delete(post_id, &auth.username)?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Post deleted successfully".to_string(),
    })))
}
