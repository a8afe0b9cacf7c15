//! Plain-text projection of a document.

use crate::domain::Document;

/// Appended to text cut short by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_LIMIT: usize = 100;

/// Block texts in reading order, one line per block. Styles and entities
/// have no plain-text form and are dropped.
pub fn to_plain_text(document: &Document) -> String {
    document
        .blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep the first `limit` characters of `text`, marking the cut with [`ELLIPSIS`].
///
/// Text of at most `limit` characters is returned unchanged.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Flatten then truncate. Styles are gone before the cut is made.
pub fn preview(document: &Document, limit: usize) -> String {
    truncate(&to_plain_text(document), limit)
}
