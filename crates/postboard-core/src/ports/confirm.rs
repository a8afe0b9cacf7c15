//! User confirmation port.

use async_trait::async_trait;

/// Asks the user to approve an irreversible action.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Returns true only if the user explicitly approved.
    async fn confirm(&self, prompt: &str) -> bool;
}
