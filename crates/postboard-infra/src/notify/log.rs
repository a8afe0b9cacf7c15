use postboard_core::ports::{Notification, Notifier, Severity};

/// Writes notifications to the log instead of showing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!(notice = "success", "{}", notification.message),
            Severity::Error => tracing::warn!(notice = "error", "{}", notification.message),
        }
    }
}
