//! Single-slot notification banner.
//!
//! A new notification replaces whatever is showing. Each one clears itself
//! after its ttl unless it has been replaced in the meantime.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::watch;

use postboard_core::ports::{Notification, Notifier};

/// The notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub notification: Notification,
}

pub struct BannerNotifier {
    banner: Arc<watch::Sender<Option<Banner>>>,
    next_id: AtomicU64,
}

impl BannerNotifier {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            banner: Arc::new(tx),
            next_id: AtomicU64::new(1),
        }
    }

    /// Follow the banner as it is shown and dismissed.
    pub fn subscribe(&self) -> watch::Receiver<Option<Banner>> {
        self.banner.subscribe()
    }

    pub fn current(&self) -> Option<Banner> {
        self.banner.borrow().clone()
    }

    /// Close the banner early.
    pub fn dismiss(&self) {
        self.banner.send_replace(None);
    }
}

impl Default for BannerNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for BannerNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let ttl = notification.ttl;
        self.banner.send_replace(Some(Banner { id, notification }));

        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(id, "No async runtime, banner will not auto-dismiss");
            return;
        };

        let banner = self.banner.clone();
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            banner.send_if_modified(|current| {
                if current.as_ref().is_some_and(|b| b.id == id) {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        });
    }
}
