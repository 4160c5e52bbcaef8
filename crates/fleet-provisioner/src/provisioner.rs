//! Provisioner trait and the node-pool-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use fleet_nodepool::{quantity_update, NodePoolClient, NodePoolId, RancherNodePoolClient};
use tracing::{error, info, warn, Instrument, Span};

use crate::config::{require_node_pool_id, ProvisionerConfig};
use crate::decision::{plan_scale_down, plan_scale_up, ScaleStep};
use crate::error::Result;
use crate::kind::ProvisionerKind;

/// The `Provisioner` trait adjusts the size of a worker pool.
///
/// Both scale operations return `true` only when the bound is already met.
/// `false` means either that a one-node adjustment was dispatched (and may
/// not have taken effect yet) or that the current size could not be read;
/// in both cases the caller is expected to call again later.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// The variant tag of this provisioner.
    fn kind(&self) -> ProvisionerKind;

    /// Grow the pool by one node unless it already has `max_n` or more.
    async fn scale_up(&self, max_n: i64) -> bool;

    /// Shrink the pool by one node unless it already has `min_n` or fewer.
    async fn scale_down(&self, min_n: i64) -> bool;
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Provisioner that scales a single remote node pool.
///
/// Holds no scaling state of its own: every call reads the pool fresh and
/// issues at most one detached update. Concurrent calls may read the same
/// quantity and request the same target, so the pool can end up one step
/// behind the number of calls made.
pub struct NodePoolProvisioner {
    node_pool_id: NodePoolId,
    client: Arc<dyn NodePoolClient>,
    span: Span,
}

impl std::fmt::Debug for NodePoolProvisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodePoolProvisioner")
            .field("node_pool_id", &self.node_pool_id)
            .finish_non_exhaustive()
    }
}

impl NodePoolProvisioner {
    /// Create a provisioner connected to the management server.
    ///
    /// The server is not contacted here. An unreachable backend is only
    /// detected by the first scale call, which then returns `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the node pool ID is empty, the CA certificate
    /// cannot be read, or the backend client cannot be initialized.
    pub fn new(config: &ProvisionerConfig) -> Result<Self> {
        let node_pool_id = config.node_pool_id()?;
        let span = Self::default_span(&node_pool_id);

        let client = span.in_scope(|| -> Result<RancherNodePoolClient> {
            let options = config.client_options().inspect_err(|e| {
                error!(error = %e, ca_cert_path = ?config.ca_cert_path, "Failed to create client options");
            })?;
            let client = RancherNodePoolClient::new(&options).inspect_err(|e| {
                error!(error = %e, "Failed to create node pool client");
            })?;
            Ok(client)
        })?;

        info!(
            parent: &span,
            server_url = %client.base_url(),
            "Created node pool provisioner"
        );

        Ok(Self {
            node_pool_id,
            client: Arc::new(client),
            span,
        })
    }

    /// Create a provisioner with a pre-built client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the node pool ID is empty.
    pub fn with_client(node_pool_id: NodePoolId, client: Arc<dyn NodePoolClient>) -> Result<Self> {
        let node_pool_id = require_node_pool_id(node_pool_id)?;
        let span = Self::default_span(&node_pool_id);
        Ok(Self {
            node_pool_id,
            client,
            span,
        })
    }

    /// Replace the span that scale operations log under.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The node pool this provisioner scales.
    #[must_use]
    pub fn node_pool_id(&self) -> &NodePoolId {
        &self.node_pool_id
    }

    fn default_span(node_pool_id: &NodePoolId) -> Span {
        tracing::info_span!(
            "provisioner",
            provisioner = %ProvisionerKind::RancherNodePool,
            node_pool_id = %node_pool_id,
        )
    }

    async fn scale(&self, direction: Direction, bound: i64) -> bool {
        match direction {
            Direction::Up => info!(max_n = bound, "Call backend to scale up"),
            Direction::Down => info!(min_n = bound, "Call backend to scale down"),
        }

        let pool = match self.client.fetch_by_id(&self.node_pool_id).await {
            Ok(pool) => pool,
            Err(e) => {
                error!(error = %e, "Failed to get node pool");
                return false;
            }
        };

        info!(
            name = %pool.name,
            node_labels = ?pool.node_labels,
            quantity = pool.quantity,
            display_name = %pool.display_name,
            "Got node pool info"
        );

        let step = match direction {
            Direction::Up => plan_scale_up(pool.quantity, bound),
            Direction::Down => plan_scale_down(pool.quantity, bound),
        };

        match (direction, step) {
            (Direction::Up, ScaleStep::Satisfied) => {
                info!(
                    quantity = pool.quantity,
                    max_n = bound,
                    "Maximum allowed number of nodes reached or exceeded, ignore scaling up"
                );
            }
            (Direction::Down, ScaleStep::Satisfied) => {
                info!(
                    quantity = pool.quantity,
                    min_n = bound,
                    "Existing number of nodes equals or is below minimum, ignore scaling down"
                );
            }
            (_, ScaleStep::Adjust(target)) => {
                info!(quantity = pool.quantity, target, "Requesting node pool quantity change");
                self.client.request_update(&pool, quantity_update(target));
            }
            (_, ScaleStep::Suppressed(target)) => {
                warn!(
                    quantity = pool.quantity,
                    target,
                    "Refusing to request a non-positive node pool quantity"
                );
            }
        }

        step.is_satisfied()
    }
}

#[async_trait]
impl Provisioner for NodePoolProvisioner {
    fn kind(&self) -> ProvisionerKind {
        ProvisionerKind::RancherNodePool
    }

    async fn scale_up(&self, max_n: i64) -> bool {
        self.scale(Direction::Up, max_n)
            .instrument(self.span.clone())
            .await
    }

    async fn scale_down(&self, min_n: i64) -> bool {
        self.scale(Direction::Down, min_n)
            .instrument(self.span.clone())
            .await
    }
}
