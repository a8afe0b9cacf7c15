//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory adapters only
//! - `http` - Remote post store over HTTP via reqwest
//! - `desktop` - Open share links with the system handler

pub mod confirm;
pub mod notify;
pub mod remote;

#[cfg(feature = "desktop")]
pub mod share;

// Re-exports - In-Memory
pub use confirm::StaticConfirmation;
pub use notify::{BannerNotifier, TracingNotifier};
pub use remote::InMemoryRemote;

#[cfg(feature = "http")]
pub use remote::{HttpPostRemote, HttpRemoteConfig};

#[cfg(feature = "desktop")]
pub use share::SystemShareTarget;
