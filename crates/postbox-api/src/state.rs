//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use postbox_auth::directory::UserDirectory;
use postbox_auth::jwt::TokenService;
use postbox_core::config::AppConfig;
use postbox_store::cache::PostCache;
use postbox_store::store::PostStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session token issuance and verification
    pub tokens: Arc<TokenService>,
    /// Username → credential map
    pub directory: Arc<UserDirectory>,
    /// Post records and id allocation
    pub posts: Arc<PostStore>,
    /// Per-user post-listing cache
    pub post_cache: Arc<PostCache>,
}

impl AppState {
    /// Builds the full component graph from configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let directory = Arc::new(UserDirectory::new());
        let posts = Arc::new(PostStore::new(config.post.max_content_chars));
        let post_cache = Arc::new(PostCache::new(
            config.cache.capacity,
            Duration::from_secs(config.cache.ttl_seconds),
        ));

        Self {
            config: Arc::new(config),
            tokens,
            directory,
            posts,
            post_cache,
        }
    }
}
