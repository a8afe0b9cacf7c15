//! Fixed-answer confirmation gate.

use async_trait::async_trait;

use postboard_core::ports::ConfirmationGate;

/// Answers every prompt the same way. For headless hosts and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmation(bool);

impl StaticConfirmation {
    pub fn approve() -> Self {
        Self(true)
    }

    pub fn deny() -> Self {
        Self(false)
    }
}

#[async_trait]
impl ConfirmationGate for StaticConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, approved = self.0, "Confirmation requested");
        self.0
    }
}
