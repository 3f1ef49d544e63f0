//! HTTP gateway
//!
//! One GET per call, resolved exactly once: either the parsed body or a
//! typed error. Timeouts are supplied per request by the caller so each
//! endpoint class keeps its own budget.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Issues requests against the configured API server
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            // Timeouts are per-request; the shared client carries none.
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a path (starting with `/`) against the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a single GET and parse the JSON body
    ///
    /// Translates every failure mode into an [`ApiError`] carrying the
    /// resolved URL: non-2xx status, timeout (the request is abandoned,
    /// never retried), connection failure, and unparseable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(&url).timeout(timeout);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) if source.is_timeout() => return Err(ApiError::Timeout { url }),
            Err(source) => return Err(ApiError::Network { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url,
            });
        }

        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(source) if source.is_timeout() => Err(ApiError::Timeout { url }),
            Err(source) if source.is_decode() => Err(ApiError::Decode { url, source }),
            Err(source) => Err(ApiError::Network { url, source }),
        }
    }
}
