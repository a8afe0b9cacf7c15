//! Share target that opens links with the system's default handler.

use async_trait::async_trait;

use postboard_core::error::ExportError;
use postboard_core::ports::ShareTarget;

/// Opens share links in the default browser or registered app.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShareTarget;

#[async_trait]
impl ShareTarget for SystemShareTarget {
    async fn open(&self, url: &str) -> Result<(), ExportError> {
        let url = url.to_string();
        // The opener may block until the handler process starts.
        tokio::task::spawn_blocking(move || open::that(url))
            .await
            .map_err(|e| ExportError::Share(e.to_string()))?
            .map_err(|e| ExportError::Share(e.to_string()))
    }
}
