//! Client-side admission checks run before any remote call.

use crate::codec;
use crate::domain::NewPost;
use crate::error::ValidationError;

/// Accept or reject a candidate post.
///
/// Content that decodes to a document with no text counts as empty; content
/// that does not decode at all is left for the remote store to hold as-is.
pub fn admit(candidate: &NewPost, max_content_len: usize) -> Result<(), ValidationError> {
    if candidate.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if candidate.content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    let len = candidate.content.chars().count();
    if len > max_content_len {
        return Err(ValidationError::ContentTooLong {
            len,
            max: max_content_len,
        });
    }

    if codec::decode_str(&candidate.content).is_ok_and(|document| document.is_empty()) {
        return Err(ValidationError::EmptyContent);
    }

    Ok(())
}
