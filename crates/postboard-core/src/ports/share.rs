//! Export ports - consumers of a post's plain text.

use async_trait::async_trait;

use crate::error::ExportError;
use crate::export::ExportDocument;

/// Opens a share link (e.g. a messaging app's compose URL).
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), ExportError>;
}

/// Lays out an exported document as pages, e.g. a PDF writer.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, document: &ExportDocument) -> Result<(), ExportError>;
}
