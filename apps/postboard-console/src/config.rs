//! Application configuration loaded from environment variables.

use postboard_core::StoreConfig;
use postboard_infra::HttpRemoteConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote: HttpRemoteConfig,
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            remote: HttpRemoteConfig::from_env(),
            store: StoreConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
