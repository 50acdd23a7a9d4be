//! # postbox-store
//!
//! In-memory post storage for Postbox.
//!
//! ## Modules
//!
//! - `post` — the post record
//! - `store` — post CRUD with monotonic id allocation
//! - `cache` — per-user TTL cache of post-id listings

pub mod cache;
pub mod post;
pub mod store;

pub use cache::PostCache;
pub use post::Post;
pub use store::PostStore;
