//! Client configuration

use std::time::Duration;

/// Client configuration
///
/// Timeouts are split by endpoint class rather than set globally: short
/// per-topic lists get an aggressive timeout, per-user and per-group
/// datasets get a generous one. Loaders pick their class; callers tune
/// the values here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API server, without a trailing slash
    pub base_url: String,
    /// Timeout for small, fast endpoints (a single topic's missions)
    pub brief_timeout: Duration,
    /// Timeout for larger per-user / per-group datasets
    pub bulk_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-server.codermerlin.academy".to_string(),
            brief_timeout: Duration::from_millis(2_500),
            bulk_timeout: Duration::from_millis(25_000),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the staging deployment
    pub fn staging() -> Self {
        Self {
            base_url: "https://api-server-stg.codermerlin.academy".to_string(),
            ..Default::default()
        }
    }

    /// Configuration pointing at an arbitrary server, default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
