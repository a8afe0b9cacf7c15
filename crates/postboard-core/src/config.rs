//! Store configuration.

use std::time::Duration;

use crate::render::DEFAULT_PREVIEW_LIMIT;

/// Limits and presentation settings for the post store and its consumers.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum encoded content length accepted by `create`, in characters.
    pub max_content_len: usize,
    /// Characters of plain text shown in a post preview.
    pub preview_limit: usize,
    /// Line width for exported documents.
    pub wrap_width: usize,
    /// How long a notification stays visible.
    pub notification_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_content_len: 5000,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            wrap_width: 180,
            notification_ttl: Duration::from_millis(3000),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_content_len: env_parse("POSTBOARD_MAX_CONTENT_LEN")
                .unwrap_or(defaults.max_content_len),
            preview_limit: env_parse("POSTBOARD_PREVIEW_LIMIT").unwrap_or(defaults.preview_limit),
            wrap_width: positive(env_parse("POSTBOARD_WRAP_WIDTH")).unwrap_or(defaults.wrap_width),
            notification_ttl: env_parse("POSTBOARD_NOTIFICATION_TTL_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_ttl),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Widths of zero would wrap every character onto its own line.
fn positive(value: Option<usize>) -> Option<usize> {
    value.filter(|&v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_falls_back_to_default() {
        assert_eq!(positive(Some(0)), None);
        assert_eq!(positive(Some(72)), Some(72));
        assert_eq!(
            positive(Some(0)).unwrap_or(StoreConfig::default().wrap_width),
            180
        );
    }
}
