//! In-memory remote post store.
//!
//! Behaves like the HTTP endpoint (ids assigned on create, list in insertion
//! order, 404 on unknown delete) but lives in the process. Used for local
//! development and as the store under test.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post, PostContent, PostId};
use postboard_core::error::RemoteRequestError;
use postboard_core::ports::PostRemote;

/// In-memory remote store using a vector behind an async RwLock.
pub struct InMemoryRemote {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicU64,
    requests: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start with `posts` already stored; new ids continue after them.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            posts: RwLock::new(posts),
            next_id: AtomicU64::new(next_id),
            requests: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every following request fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of requests received so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Current contents, bypassing the request counter.
    pub async fn snapshot(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    fn begin(&self, operation: &'static str) -> Result<(), RemoteRequestError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            tracing::debug!(operation, "Injected remote failure");
            return Err(RemoteRequestError::Status {
                operation,
                status: 503,
            });
        }
        Ok(())
    }
}

impl Default for InMemoryRemote {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRemote for InMemoryRemote {
    async fn list(&self) -> Result<Vec<Post>, RemoteRequestError> {
        self.begin("list")?;
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, post: &NewPost) -> Result<(), RemoteRequestError> {
        self.begin("create")?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Post {
            id: PostId::new(id.to_string()),
            title: post.title.clone(),
            content: PostContent::Raw(post.content.clone()),
            created_at: Some(post.created_at.clone()),
        };

        tracing::debug!(post_id = %created.id, "Post stored");
        self.posts.write().await.push(created);

        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<(), RemoteRequestError> {
        self.begin("delete")?;

        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| &p.id != id);

        if posts.len() == before {
            return Err(RemoteRequestError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
