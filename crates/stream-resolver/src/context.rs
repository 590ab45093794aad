//! Per-request context
//!
//! A [`RequestContext`] carries everything sources and extractors need that
//! is not part of the title request itself: the read-only configuration, the
//! host URL used for fallback messaging, and a shared HTTP client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::AppConfig;

/// Context handed into every source and extractor call
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub config: Arc<AppConfig>,
    /// Public URL of the hosting addon, used for the no-sources fallback
    pub host_url: Url,
    /// Shared HTTP client for plugin use; the orchestrator itself performs
    /// no network I/O
    pub http: Client,
}

impl RequestContext {
    pub fn new(config: AppConfig, host_url: Url) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            config: Arc::new(config),
            host_url,
            http,
        }
    }

    /// Build a context around an already-configured HTTP client
    pub fn with_client(config: AppConfig, host_url: Url, http: Client) -> Self {
        Self {
            config: Arc::new(config),
            host_url,
            http,
        }
    }

    /// URL of the addon configuration page, for the no-sources message
    pub fn configure_url(&self) -> String {
        self.host_url
            .join("configure")
            .map(|u| u.to_string())
            .unwrap_or_else(|_| self.host_url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_url() {
        let ctx = RequestContext::new(
            AppConfig::default(),
            Url::parse("https://addon.example.com/").unwrap(),
        );

        assert_eq!(ctx.configure_url(), "https://addon.example.com/configure");
    }
}
