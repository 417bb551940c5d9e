use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::AggregateError;
use crate::post::Post;

#[derive(Debug, Clone)]
struct CacheEntry {
    posts: Vec<Post>,
    expires_at: Instant,
}

/// Tag-keyed response cache with a fixed TTL.
///
/// Expiry is checked lazily on read; there is no background eviction. The
/// contract is freshness within the TTL, not at-most-once compute: the lock
/// is not held across `compute`, so concurrent callers racing on the same
/// cold key may each compute, and the last writer wins.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    inner: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Return the cached post list for `tag` if a live entry exists.
    pub async fn get(&self, tag: &str) -> Option<Vec<Post>> {
        let inner = self.inner.read().await;
        inner
            .get(tag)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.posts.clone())
    }

    /// Store `posts` under `tag` with a fresh deadline, replacing any
    /// previous entry.
    pub async fn insert(&self, tag: &str, posts: Vec<Post>) {
        let entry = CacheEntry {
            posts,
            expires_at: Instant::now() + self.ttl,
        };
        self.inner.write().await.insert(tag.to_owned(), entry);
    }

    /// Serve `tag` from cache, or run `compute` and cache its result.
    /// Failed computes are not cached.
    pub async fn get_or_compute<F, Fut>(
        &self,
        tag: &str,
        compute: F,
    ) -> Result<Vec<Post>, AggregateError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Post>, AggregateError>>,
    {
        if let Some(posts) = self.get(tag).await {
            debug!(tag, "cache hit");
            return Ok(posts);
        }

        let posts = compute().await?;
        self.insert(tag, posts.clone()).await;
        Ok(posts)
    }
}
