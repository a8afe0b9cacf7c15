use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Document;
use crate::codec;

/// Identifier assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Serialized document as held by a post.
///
/// Some paths hand over the raw JSON string, others an already parsed value;
/// both decode the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostContent {
    Raw(String),
    Structured(Value),
}

impl PostContent {
    /// The serialized text form.
    pub fn as_raw(&self) -> Cow<'_, str> {
        match self {
            PostContent::Raw(raw) => Cow::Borrowed(raw.as_str()),
            PostContent::Structured(Value::Null) => Cow::Borrowed(""),
            PostContent::Structured(Value::String(raw)) => Cow::Borrowed(raw.as_str()),
            PostContent::Structured(value) => Cow::Owned(value.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_raw().trim().is_empty()
    }
}

impl Default for PostContent {
    fn default() -> Self {
        PostContent::Raw(String::new())
    }
}

impl From<String> for PostContent {
    fn from(raw: String) -> Self {
        PostContent::Raw(raw)
    }
}

impl From<&Document> for PostContent {
    fn from(document: &Document) -> Self {
        PostContent::Raw(codec::encode(document))
    }
}

/// Post as last read from the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: PostContent,
    pub created_at: Option<String>,
}

/// Candidate post built at submission time, before the remote store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            created_at: created_at.into(),
        }
    }

    /// Encode `document` and stamp the post with the local wall-clock time.
    pub fn from_document(title: impl Into<String>, document: &Document) -> Self {
        let created_at = chrono::Local::now().format("%H:%M").to_string();
        Self::new(title, codec::encode(document), created_at)
    }
}
