//! Per-user TTL cache of post-id listings.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

/// A cached listing with its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry {
    ids: Vec<u64>,
    inserted_at: Instant,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    /// Usernames in insertion order, oldest first. Refreshing an entry
    /// moves its username to the back.
    order: VecDeque<String>,
}

/// Per-user, time-expiring cache of post-id listings.
///
/// Entries live for a fixed TTL from insertion and are checked lazily on
/// access; an expired entry is never returned as live. When the cache is at
/// capacity, the least-recently-inserted entry is evicted.
///
/// Post creation and deletion do NOT invalidate a live entry. The stale-read
/// window inside the TTL is part of the listing contract; callers get a
/// point-in-time snapshot that refreshes only on expiry or eviction.
#[derive(Debug)]
pub struct PostCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    ttl: Duration,
}

impl PostCache {
    /// Creates an empty cache with the given capacity and entry TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity,
            ttl,
        }
    }

    /// Returns the live cached listing for `username`, or computes, stores,
    /// and returns a fresh one.
    ///
    /// A live entry is returned verbatim even when the cached list is empty.
    /// The whole lookup-compute-store sequence runs under one lock, so
    /// concurrent calls for the same username never interleave.
    pub fn get_or_compute<F>(&self, username: &str, compute: F) -> Vec<u64>
    where
        F: FnOnce() -> Vec<u64>,
    {
        let mut inner = self.inner.lock().expect("post cache lock poisoned");

        if let Some(entry) = inner.entries.get(username) {
            if entry.inserted_at.elapsed() < self.ttl {
                return entry.ids.clone();
            }
        }

        let ids = compute();
        debug!(username, count = ids.len(), "Post listing cached");
        Self::insert(&mut inner, self.capacity, username, ids.clone());
        ids
    }

    /// Inserts an entry with a fresh timestamp, evicting the oldest entries
    /// once over capacity.
    fn insert(inner: &mut CacheInner, capacity: usize, username: &str, ids: Vec<u64>) {
        if inner.entries.contains_key(username) {
            inner.order.retain(|name| name != username);
        }
        inner.order.push_back(username.to_string());
        inner.entries.insert(
            username.to_string(),
            CacheEntry {
                ids,
                inserted_at: Instant::now(),
            },
        );

        while inner.entries.len() > capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                debug!(username = %oldest, "Cache entry evicted");
            }
        }
    }
}
