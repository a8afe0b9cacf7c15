//! Conversion between [`Document`] and the serialized form stored in a post.
//!
//! Encoding is byte-stable: struct fields serialize in declaration order and
//! the entity map is ordered, so the same document always produces the same
//! string. Decoding validates the document's invariants and never returns a
//! partially usable result.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Document, PostContent};
use crate::error::MalformedContentError;

/// Serialize a document to its stored JSON form.
pub fn encode(document: &Document) -> String {
    serde_json::to_string(document).expect("document serialization is infallible")
}

/// Decode stored content, whichever representation it arrived in.
pub fn decode(content: &PostContent) -> Result<Document, MalformedContentError> {
    match content {
        PostContent::Raw(raw) => decode_str(raw),
        PostContent::Structured(value) => decode_value(value),
    }
}

/// Decode the raw JSON string form.
pub fn decode_str(raw: &str) -> Result<Document, MalformedContentError> {
    let document: Document =
        serde_json::from_str(raw).map_err(|e| MalformedContentError::Syntax(e.to_string()))?;
    document.validate()?;
    Ok(document)
}

/// Decode an already parsed value.
pub fn decode_value(value: &Value) -> Result<Document, MalformedContentError> {
    // A string value is the raw form wrapped once more.
    if let Value::String(raw) = value {
        return decode_str(raw);
    }

    let document =
        Document::deserialize(value).map_err(|e| MalformedContentError::Syntax(e.to_string()))?;
    document.validate()?;
    Ok(document)
}

/// Result of [`decode_or_placeholder`].
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    /// The decoded document, or the placeholder when decoding failed.
    pub document: Document,
    pub error: Option<MalformedContentError>,
}

impl DecodeOutcome {
    pub fn is_placeholder(&self) -> bool {
        self.error.is_some()
    }
}

/// Decode `content`, substituting [`Document::placeholder`] on failure.
pub fn decode_or_placeholder(content: &PostContent) -> DecodeOutcome {
    match decode(content) {
        Ok(document) => DecodeOutcome {
            document,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Stored content could not be decoded, using placeholder");
            DecodeOutcome {
                document: Document::placeholder(),
                error: Some(e),
            }
        }
    }
}
