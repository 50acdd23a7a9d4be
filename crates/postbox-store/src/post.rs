//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored post. The id is assigned by the store at creation and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique, monotonically increasing identifier.
    pub id: u64,
    /// Username of the post's owner.
    pub owner: String,
    /// Post body.
    pub content: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}
