//! HTTP remote post store - `GET` list, `POST` create, `DELETE {id}` over a fixed base path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use postboard_core::domain::{NewPost, Post, PostId};
use postboard_core::error::RemoteRequestError;
use postboard_core::ports::PostRemote;
use postboard_shared::PostRecord;

use super::record::{create_request, post_from_record};

const DEFAULT_BASE_URL: &str = "https://67597cc1099e3090dbe1db94.mockapi.io/api/blog/posts";

/// HTTP remote configuration.
#[derive(Debug, Clone)]
pub struct HttpRemoteConfig {
    /// Collection URL; single posts live at `{base_url}/{id}`.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpRemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl HttpRemoteConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("POSTBOARD_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: std::env::var("POSTBOARD_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }
}

/// reqwest-backed remote post store.
///
/// Any transport failure or non-success status is an error; nothing is retried.
pub struct HttpPostRemote {
    client: Client,
    config: HttpRemoteConfig,
}

impl HttpPostRemote {
    pub fn new(config: HttpRemoteConfig) -> Result<Self, RemoteRequestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteRequestError::Transport(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, "HTTP remote post store configured");

        Ok(Self { client, config })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, RemoteRequestError> {
        Self::new(HttpRemoteConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn post_url(&self, id: &PostId) -> String {
        format!("{}/{}", self.base_url(), urlencoding::encode(id.as_str()))
    }
}

/// Fail on any non-success status.
fn check(response: Response, operation: &'static str) -> Result<Response, RemoteRequestError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(operation, status = status.as_u16(), "Remote store rejected request");
        Err(RemoteRequestError::Status {
            operation,
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl PostRemote for HttpPostRemote {
    async fn list(&self) -> Result<Vec<Post>, RemoteRequestError> {
        tracing::debug!(url = %self.base_url(), "Listing posts");

        let response = self
            .client
            .get(self.base_url())
            .send()
            .await
            .map_err(|e| RemoteRequestError::Transport(e.to_string()))?;

        let records: Vec<PostRecord> = check(response, "list")?
            .json()
            .await
            .map_err(|e| RemoteRequestError::Decode(e.to_string()))?;

        Ok(records.into_iter().map(post_from_record).collect())
    }

    async fn create(&self, post: &NewPost) -> Result<(), RemoteRequestError> {
        tracing::debug!(url = %self.base_url(), title = %post.title, "Creating post");

        let response = self
            .client
            .post(self.base_url())
            .json(&create_request(post))
            .send()
            .await
            .map_err(|e| RemoteRequestError::Transport(e.to_string()))?;

        let response = check(response, "create")?;
        tracing::debug!(status = response.status().as_u16(), "Post accepted");
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<(), RemoteRequestError> {
        let url = self.post_url(id);
        tracing::debug!(url = %url, "Deleting post");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| RemoteRequestError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RemoteRequestError::NotFound(id.to_string()));
        }

        check(response, "delete")?;
        Ok(())
    }
}
