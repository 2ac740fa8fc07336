//! # Application configuration — `petspa.toml`
//!
//! Where the remote API lives and how the connectivity ping behaves.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://peluqueria.example.com/api"
//!
//! [health]
//! interval_secs = 30   # ping period, 0 disables the periodic ping
//! timeout_ms = 3000    # fixed timeout for a single ping
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers (`with_base_url`), TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | `base_url` of the REST API. Defaults to `PETSPA_API_URL` when it was set at build time, else [`DEFAULT_API_URL`]. |
//! | [`HealthConfig`] | Ping period and timeout, **30 s** and **3000 ms** by default. |
//!
//! All structs derive `Default` so that a missing or empty file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fallback API location for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Top-level configuration stored in `petspa.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("PETSPA_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Connectivity ping configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_interval_secs() -> u32 {
    30
}

fn default_timeout_ms() -> u32 {
    3000
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl HealthConfig {
    /// Ping period, or `None` when periodic pinging is disabled.
    pub fn interval(&self) -> Option<Duration> {
        (self.interval_secs > 0).then(|| Duration::from_secs(u64::from(self.interval_secs)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}

impl AppConfig {
    /// Builder method to point at a different API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "petspa.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.health.interval(), Some(Duration::from_secs(30)));
        assert_eq!(config.health.timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://peluqueria.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://peluqueria.example.com/api");
        assert_eq!(config.health, HealthConfig::default());
    }

    #[test]
    fn test_zero_interval_disables_ping() {
        let config = AppConfig::from_toml("[health]\ninterval_secs = 0").unwrap();
        assert!(config.health.interval().is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_base_url("https://api.petspa.test");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
