//! Error types for the academy client

use thiserror::Error;

/// Client error
///
/// Every failure a loader can observe is one of these variants, and each
/// carries the resolved request URL so a diagnostic message can be
/// reconstructed without re-fetching.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("{status} ({status_text}) while invoking '{url}'")]
    Status {
        status: u16,
        status_text: String,
        url: String,
    },

    /// Request exceeded its configured timeout and was abandoned
    #[error("timeout while invoking '{url}'")]
    Timeout { url: String },

    /// Connection-level failure before a status was received
    #[error("network failure while invoking '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not parse as the expected shape
    #[error("malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The URL the failing request was issued against
    pub fn url(&self) -> &str {
        match self {
            ApiError::Status { url, .. }
            | ApiError::Timeout { url }
            | ApiError::Network { url, .. }
            | ApiError::Decode { url, .. } => url,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
