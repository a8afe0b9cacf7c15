//! Notifier implementations - an auto-dismissing banner and a log sink.

mod banner;
mod log;

pub use banner::{Banner, BannerNotifier};
pub use log::TracingNotifier;
