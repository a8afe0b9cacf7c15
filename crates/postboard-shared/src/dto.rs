//! Data Transfer Objects - JSON bodies of the remote post store.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Post identifier as sent by the remote store, which may use strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Text(id) => f.write_str(id),
            WireId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// A post as returned by the list and create endpoints.
///
/// `content` is usually the serialized document as a string, but some
/// records hold it as a nested object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: WireId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub created_at: String,
}
