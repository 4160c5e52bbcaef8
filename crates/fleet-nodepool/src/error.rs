//! Error types for the node pool client.

use thiserror::Error;

use crate::types::NodePoolId;

/// A result type using `NodePoolError`.
pub type Result<T> = std::result::Result<T, NodePoolError>;

/// Errors that can occur while talking to the node pool management API.
#[derive(Debug, Error)]
pub enum NodePoolError {
    /// The server URL could not be parsed.
    #[error("invalid server URL {url}: {reason}")]
    InvalidUrl {
        /// The URL after normalization.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The CA certificate could not be loaded.
    #[error("invalid CA certificate: {0}")]
    Tls(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The node pool does not exist.
    #[error("node pool not found: {0}")]
    NotFound(NodePoolId),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the backend.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A detached request was issued outside of a tokio runtime.
    #[error("no async runtime available to dispatch request")]
    NoRuntime,
}

impl NodePoolError {
    /// Returns true if this error might be resolved by retrying.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
