//! Application configuration
//!
//! Loaded once at startup from a TOML file (path taken from the
//! `CONFIG_FILE` environment variable, defaulting to `config.toml`) and
//! treated as read-only afterwards. Every field has a default so an empty
//! file is a valid configuration.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod defaults;

use defaults::*;

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name of the addon, used as the first line of every stream name
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Ordered allow-list of source ids queried sequentially in phase 1.
    /// Sources not on this list are only queried as a parallel fallback.
    #[serde(default)]
    pub prioritized_sources: Vec<String>,

    /// Render a visible stream entry when a source fails
    #[serde(default)]
    pub show_errors: bool,

    /// Mark external redirects with a warning suffix in the stream name
    #[serde(default)]
    pub show_external_urls: bool,

    /// Deadline in seconds for one source's full handling (fetch plus
    /// extraction). 0 disables the deadline.
    #[serde(default = "default_source_timeout_secs")]
    pub source_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            prioritized_sources: Vec::new(),
            show_errors: false,
            show_external_urls: false,
            source_timeout_secs: default_source_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("Config file {} not found, using defaults", config_file);
            Ok(Self::default())
        }
    }

    /// Per-source deadline, if one is configured
    pub fn source_timeout(&self) -> Option<Duration> {
        (self.source_timeout_secs > 0).then(|| Duration::from_secs(self.source_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(config.prioritized_sources.is_empty());
        assert!(!config.show_errors);
        assert!(!config.show_external_urls);
        assert_eq!(
            config.source_timeout(),
            Some(Duration::from_secs(DEFAULT_SOURCE_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            show_errors = true
            prioritized_sources = ["embed69", "megakino"]
            "#,
        )
        .unwrap();

        assert!(config.show_errors);
        assert_eq!(config.prioritized_sources, vec!["embed69", "megakino"]);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config = AppConfig {
            source_timeout_secs: 0,
            ..Default::default()
        };

        assert_eq!(config.source_timeout(), None);
    }
}
