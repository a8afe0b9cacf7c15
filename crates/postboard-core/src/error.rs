//! Domain-level error types.

use thiserror::Error;

use crate::domain::EntityKey;

/// Stored content that cannot be turned back into a [`Document`](crate::domain::Document).
///
/// Recovered locally by substituting the placeholder document; never shown
/// to the user as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedContentError {
    #[error("Content is not a valid document: {0}")]
    Syntax(String),

    #[error("Document has no blocks")]
    NoBlocks,

    #[error("Duplicate block key: {0}")]
    DuplicateBlockKey(String),

    #[error("Block {block_key} references missing entity {entity_key}")]
    MissingEntity {
        block_key: String,
        entity_key: EntityKey,
    },

    #[error("Range {offset}+{length} exceeds block {block_key} of length {text_len}")]
    RangeOutOfBounds {
        block_key: String,
        offset: usize,
        length: usize,
        text_len: usize,
    },
}

/// A failed list, create or delete call against the remote store.
///
/// Transport failures and non-success responses are treated alike by the
/// store; the variants only exist for logging.
#[derive(Debug, Clone, Error)]
pub enum RemoteRequestError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Remote store returned status {status} for {operation}")]
    Status { operation: &'static str, status: u16 },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Post not found: {0}")]
    NotFound(String),
}

/// Client-side admission check failures on create. No remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Content is required")]
    EmptyContent,

    #[error("Content is {len} characters, maximum is {max}")]
    ContentTooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Short message suitable for a notification banner.
    pub fn notice(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle | ValidationError::EmptyContent => {
                "Title and content are required."
            }
            ValidationError::ContentTooLong { .. } => "Content exceeds maximum allowed length.",
        }
    }
}

/// Failures handing a post over to a share target or page renderer.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to open share target: {0}")]
    Share(String),

    #[error("Failed to render document: {0}")]
    Render(String),
}

/// Result error of a post store operation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteRequestError),
}
