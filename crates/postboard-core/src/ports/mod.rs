//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod confirm;
mod notify;
mod remote;
mod share;

pub use confirm::ConfirmationGate;
pub use notify::{Notification, Notifier, Severity};
pub use remote::PostRemote;
pub use share::{PageRenderer, ShareTarget};
