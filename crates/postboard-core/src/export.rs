//! Export adapters - hand a post's plain text to a share target or page renderer.

use std::sync::Arc;

use crate::codec;
use crate::domain::Post;
use crate::error::ExportError;
use crate::ports::{PageRenderer, ShareTarget};
use crate::render;

pub const UNTITLED: &str = "Untitled";
pub const UNTITLED_FILE: &str = "untitled";

/// Compose URL of the message share target.
pub const SHARE_URL: &str = "https://wa.me/?text=";

/// Title, file name and wrapped lines handed to a page renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub title: String,
    pub file_name: String,
    pub lines: Vec<String>,
}

fn plain_text(post: &Post) -> String {
    render::to_plain_text(&codec::decode_or_placeholder(&post.content).document)
}

/// `*Title*` followed by a blank line and the post's plain text.
pub fn share_text(post: &Post) -> String {
    let title = if post.title.is_empty() {
        UNTITLED
    } else {
        post.title.as_str()
    };
    format!("*{}*\n\n{}", title, plain_text(post))
}

/// Share-target URL carrying `text`.
pub fn share_link(text: &str) -> String {
    format!("{}{}", SHARE_URL, urlencoding::encode(text))
}

/// Wrap the post's plain text to `width` columns for a page renderer.
///
/// A width of zero is treated as one column.
pub fn export_document(post: &Post, width: usize) -> ExportDocument {
    let (title, stem) = if post.title.is_empty() {
        (UNTITLED, UNTITLED_FILE)
    } else {
        (post.title.as_str(), post.title.as_str())
    };

    let lines = textwrap::wrap(&plain_text(post), width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    ExportDocument {
        title: title.to_string(),
        file_name: format!("{}.pdf", stem),
        lines,
    }
}

/// Sends posts to the configured share target and page renderer.
pub struct Exporter {
    share: Arc<dyn ShareTarget>,
    pages: Arc<dyn PageRenderer>,
    wrap_width: usize,
}

impl Exporter {
    pub fn new(
        share: Arc<dyn ShareTarget>,
        pages: Arc<dyn PageRenderer>,
        wrap_width: usize,
    ) -> Self {
        Self {
            share,
            pages,
            wrap_width,
        }
    }

    /// Open the share target with the post's share message.
    pub async fn share(&self, post: &Post) -> Result<(), ExportError> {
        let link = share_link(&share_text(post));
        tracing::debug!(post_id = %post.id, "Opening share link");
        self.share.open(&link).await
    }

    /// Render the post as a document and return what was rendered.
    pub async fn download(&self, post: &Post) -> Result<ExportDocument, ExportError> {
        let document = export_document(post, self.wrap_width);
        tracing::debug!(
            post_id = %post.id,
            file_name = %document.file_name,
            lines = document.lines.len(),
            "Rendering export document"
        );
        self.pages.render(&document).await?;
        Ok(document)
    }
}
