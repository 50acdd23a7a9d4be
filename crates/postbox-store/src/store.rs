//! In-memory post store with monotonic id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use postbox_core::error::AppError;
use postbox_core::result::AppResult;

use crate::post::Post;

/// The single client-facing message for every delete failure. Missing post
/// and foreign ownership are indistinguishable to the caller, so a delete
/// cannot be used to probe for other users' post ids.
const POST_NOT_FOUND: &str = "Post not found";

/// Owns all post records and the post-id allocator.
///
/// Ids start at 1, increase by exactly one per successful create, and are
/// never reused after deletion. The counter is encapsulated here so the
/// uniqueness and monotonicity invariants are enforced in one place.
#[derive(Debug)]
pub struct PostStore {
    posts: DashMap<u64, Post>,
    next_id: AtomicU64,
    max_content_chars: usize,
}

impl PostStore {
    /// Creates an empty store enforcing the given content length limit.
    pub fn new(max_content_chars: usize) -> Self {
        Self {
            posts: DashMap::new(),
            next_id: AtomicU64::new(1),
            max_content_chars,
        }
    }

    /// Creates a post and returns its freshly allocated id.
    ///
    /// Fails with a validation error if the content exceeds the configured
    /// character limit; no id is consumed in that case.
    pub fn create(&self, owner: &str, content: &str) -> AppResult<u64> {
        if content.chars().count() > self.max_content_chars {
            return Err(AppError::validation("Post content is too large"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.posts.insert(
            id,
            Post {
                id,
                owner: owner.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
            },
        );

        debug!(owner, id, "Post created");
        Ok(id)
    }

    /// Returns all live post ids owned by `owner`, in insertion order.
    ///
    /// Ids are allocated in insertion order, so ascending id order is
    /// insertion order.
    pub fn ids_for_owner(&self, owner: &str) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .posts
            .iter()
            .filter(|entry| entry.value().owner == owner)
            .map(|entry| *entry.key())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Deletes a post if it exists and belongs to `requester`.
    ///
    /// The ownership check and removal are a single atomic operation on the
    /// map entry; both failure modes collapse into one not-found error.
    pub fn delete(&self, post_id: u64, requester: &str) -> AppResult<()> {
        self.posts
            .remove_if(&post_id, |_, post| post.owner == requester)
            .map(|_| debug!(requester, post_id, "Post deleted"))
            .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use postbox_core::error::ErrorKind;

    fn store() -> PostStore {
        PostStore::new(1_000_000)
    }

    #[test]
    fn sequential_creates_yield_consecutive_ids() {
        let store = store();
        let first = store.create("alice", "hello").unwrap();
        let second = store.create("alice", "world").unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn content_at_limit_succeeds_one_over_fails() {
        let store = store();
        let at_limit = "x".repeat(1_000_000);
        assert!(store.create("alice", &at_limit).is_ok());

        let over_limit = "x".repeat(1_000_001);
        let err = store.create("alice", &over_limit).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn rejected_create_consumes_no_id() {
        let store = store();
        let over_limit = "x".repeat(1_000_001);
        assert!(store.create("alice", &over_limit).is_err());
        assert_eq!(store.create("alice", "ok").unwrap(), 1);
    }

    #[test]
    fn multibyte_content_is_counted_in_chars() {
        let store = PostStore::new(3);
        // Three multibyte characters: 6 bytes, 3 chars.
        assert!(store.create("alice", "äöü").is_ok());
        assert!(store.create("alice", "äöüß").is_err());
    }

    #[test]
    fn ids_for_owner_filters_and_orders() {
        let store = store();
        store.create("alice", "a1").unwrap();
        store.create("bob", "b1").unwrap();
        store.create("alice", "a2").unwrap();

        assert_eq!(store.ids_for_owner("alice"), vec![1, 3]);
        assert_eq!(store.ids_for_owner("bob"), vec![2]);
        assert!(store.ids_for_owner("carol").is_empty());
    }

    #[test]
    fn delete_twice_fails_not_found() {
        let store = store();
        let id = store.create("alice", "hello").unwrap();
        store.delete(id, "alice").unwrap();
        let err = store.delete(id, "alice").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn delete_foreign_post_fails_not_found() {
        let store = store();
        let id = store.create("alice", "hello").unwrap();
        let err = store.delete(id, "bob").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        // The post survives the failed attempt.
        assert_eq!(store.ids_for_owner("alice"), vec![id]);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = store();
        let first = store.create("alice", "one").unwrap();
        store.delete(first, "alice").unwrap();
        let second = store.create("alice", "two").unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn concurrent_creates_yield_distinct_contiguous_ids() {
        let store = Arc::new(store());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|_| store.create("alice", "content").unwrap())
                    .collect::<Vec<u64>>()
            }));
        }

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&400));
    }
}
