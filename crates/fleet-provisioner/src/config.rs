//! Provisioner configuration.

use std::path::PathBuf;
use std::time::Duration;

use fleet_nodepool::{ClientOptions, NodePoolId, TrustMode};
use serde::Deserialize;

use crate::error::{ProvisionerError, Result};

/// Configuration for a node-pool-backed provisioner.
#[derive(Clone, Deserialize)]
pub struct ProvisionerConfig {
    /// Management server URL (the `/v3` suffix is optional).
    pub server_url: String,

    /// API token used to access the server.
    #[serde(default)]
    pub token: String,

    /// ID of the node pool to scale.
    pub node_pool_id: String,

    /// Path to a PEM CA certificate. Without it, certificates are not verified.
    #[serde(default)]
    pub ca_cert_path: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "ProvisionerConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "ProvisionerConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl ProvisionerConfig {
    const fn default_request_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    /// Create a config with default timeouts and no CA certificate.
    #[must_use]
    pub fn new(
        server_url: impl Into<String>,
        token: impl Into<String>,
        node_pool_id: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            token: token.into(),
            node_pool_id: node_pool_id.into(),
            ca_cert_path: None,
            request_timeout_seconds: Self::default_request_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
        }
    }

    /// Set the CA certificate path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert_path = Some(path.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Supported environment variables:
    /// - `RANCHER_URL`: management server URL
    /// - `RANCHER_TOKEN`: API token
    /// - `RANCHER_NODE_POOL_ID`: node pool to scale
    /// - `RANCHER_CA`: path to a PEM CA certificate (empty means none)
    /// - `RANCHER_REQUEST_TIMEOUT_SECONDS`: request timeout
    /// - `RANCHER_CONNECT_TIMEOUT_SECONDS`: connect timeout
    ///
    /// Missing values are left empty; they are validated when the
    /// provisioner is built.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let mut config = Self::new(
            var("RANCHER_URL"),
            var("RANCHER_TOKEN"),
            var("RANCHER_NODE_POOL_ID"),
        );

        if let Ok(val) = std::env::var("RANCHER_CA") {
            if !val.is_empty() {
                config.ca_cert_path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("RANCHER_REQUEST_TIMEOUT_SECONDS") {
            if let Ok(n) = val.parse() {
                config.request_timeout_seconds = n;
            }
        }
        if let Ok(val) = std::env::var("RANCHER_CONNECT_TIMEOUT_SECONDS") {
            if let Ok(n) = val.parse() {
                config.connect_timeout_seconds = n;
            }
        }

        config
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// The configured node pool ID.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the ID is empty.
    pub fn node_pool_id(&self) -> Result<NodePoolId> {
        require_node_pool_id(NodePoolId::new(self.node_pool_id.clone()))
    }

    /// Build client options, reading the CA certificate if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the CA certificate cannot be read.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let trust = match &self.ca_cert_path {
            Some(path) => {
                let pem = std::fs::read(path).map_err(|source| ProvisionerError::Io {
                    path: path.clone(),
                    source,
                })?;
                TrustMode::CaPem(pem)
            }
            None => TrustMode::Insecure,
        };

        let mut options = ClientOptions::new(&self.server_url, &self.token, trust);
        options.timeout = self.request_timeout();
        options.connect_timeout = self.connect_timeout();
        Ok(options)
    }
}

/// Reject an empty node pool ID.
pub(crate) fn require_node_pool_id(id: NodePoolId) -> Result<NodePoolId> {
    if id.is_empty() {
        return Err(ProvisionerError::Configuration(
            "node pool ID must be set to use the ranchernodepool provisioner".to_string(),
        ));
    }
    Ok(id)
}

impl std::fmt::Debug for ProvisionerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionerConfig")
            .field("server_url", &self.server_url)
            .field("token", &"<redacted>")
            .field("node_pool_id", &self.node_pool_id)
            .field("ca_cert_path", &self.ca_cert_path)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}
