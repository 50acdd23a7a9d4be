//! Post content configuration.

use serde::{Deserialize, Serialize};

/// Post content limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostConfig {
    /// Maximum post content length in characters.
    #[serde(default = "default_max_content")]
    pub max_content_chars: usize,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            max_content_chars: default_max_content(),
        }
    }
}

fn default_max_content() -> usize {
    1_000_000
}
