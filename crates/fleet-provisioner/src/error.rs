//! Error types for provisioner construction.

use std::path::PathBuf;

use thiserror::Error;

/// A result type using `ProvisionerError`.
pub type Result<T> = std::result::Result<T, ProvisionerError>;

/// Errors that can occur while building a provisioner.
///
/// Scale operations never return these; their failures are folded into the
/// boolean outcome and logged.
#[derive(Debug, Error)]
pub enum ProvisionerError {
    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The CA certificate file could not be read.
    #[error("failed to read CA certificate {path}: {source}")]
    Io {
        /// Path of the CA certificate.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backend client could not be initialized.
    #[error("failed to initialize backend client: {0}")]
    BackendInit(#[from] fleet_nodepool::NodePoolError),
}
