use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RemoteRequestError;

/// Remote post store - an HTTP-style CRUD endpoint with no concurrency control.
#[async_trait]
pub trait PostRemote: Send + Sync {
    /// Fetch every post, in the order the remote store returns them.
    async fn list(&self) -> Result<Vec<Post>, RemoteRequestError>;

    /// Create a post. The remote store assigns its id.
    ///
    /// Any success response counts; its body is not read, since the store
    /// refetches the list afterwards.
    async fn create(&self, post: &NewPost) -> Result<(), RemoteRequestError>;

    /// Delete a post by id.
    async fn delete(&self, id: &PostId) -> Result<(), RemoteRequestError>;
}
