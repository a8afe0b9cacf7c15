//! # Postboard Console
//!
//! Loads the post list from the remote store and prints a preview card for
//! each post. Notifications are written to the log.

use std::sync::Arc;

use postboard_core::store::PostStore;
use postboard_core::view::ViewCache;
use postboard_infra::{HttpPostRemote, TracingNotifier};

mod config;
mod telemetry;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(base_url = %config.remote.base_url, "Starting Postboard console");

    let remote = Arc::new(HttpPostRemote::new(config.remote.clone())?);
    let store = PostStore::new(remote, Arc::new(TracingNotifier), config.store.clone());

    // A failed load has already been logged and reported; show what we have.
    if let Err(e) = store.refresh().await {
        tracing::debug!(error = %e, "Initial load failed");
    }

    let state = store.state();
    let posts = state.visible_posts();
    if posts.is_empty() {
        println!("No posts available.");
        return Ok(());
    }

    let mut cache = ViewCache::new();
    for post in posts {
        let view = cache.view(post, config.store.preview_limit);
        println!("[{}] {}  ({})", view.avatar, view.title, view.subheader);
        println!("    {}", view.preview.replace('\n', "\n    "));
        println!();
    }

    Ok(())
}
