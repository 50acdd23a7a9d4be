//! Post-listing cache configuration.

use serde::{Deserialize, Serialize};

/// Per-user post-listing cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached user entries. The least-recently-inserted
    /// entry is evicted when the cache is full.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// TTL for cached entries in seconds, measured from insertion.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            ttl_seconds: default_ttl(),
        }
    }
}

fn default_capacity() -> usize {
    100
}

fn default_ttl() -> u64 {
    300
}
