//! Scale decision core for the fleet autoscaler.
//!
//! A [`Provisioner`] adjusts the size of a worker pool by one node per call
//! in response to scale signals from an outer control loop. This crate
//! provides the trait and [`NodePoolProvisioner`], which scales a remote
//! node pool through a [`fleet_nodepool::NodePoolClient`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Outer control loop              │
//! └─────────────────────────────────────────────┘
//!            │ scale_up(max_n) / scale_down(min_n)
//!            ▼                       ▲ bool
//! ┌─────────────────────────────────────────────┐
//! │            NodePoolProvisioner               │
//! │   fetch ──▶ plan_scale_* ──▶ request_update  │
//! └─────────────────────────────────────────────┘
//!            │ GET (awaited)        │ PUT (detached)
//!            ▼                      ▼
//! ┌─────────────────────────────────────────────┐
//! │        Node pool management API (/v3)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Results
//!
//! | Situation                                | Update sent | Returns |
//! |------------------------------------------|-------------|---------|
//! | Bound already met                        | no          | `true`  |
//! | Pool could not be read                   | no          | `false` |
//! | One-node adjustment dispatched           | yes         | `false` |
//! | Scale-down target would be zero or less  | no          | `false` |
//!
//! The dispatched update is not awaited; its failure is never reported
//! through the return value.
//!
//! # Example
//!
//! ```no_run
//! use fleet_provisioner::{NodePoolProvisioner, Provisioner, ProvisionerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProvisionerConfig::new(
//!     "https://rancher.example.com",
//!     "token-abc12:secret",
//!     "c-abc12:np-xyz34",
//! )
//! .with_ca_cert("/etc/rancher/ca.pem");
//!
//! let provisioner = NodePoolProvisioner::new(&config)?;
//!
//! if provisioner.scale_up(5).await {
//!     println!("pool already at its ceiling");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod decision;
pub mod error;
pub mod kind;
pub mod provisioner;

pub use config::ProvisionerConfig;
pub use decision::{plan_scale_down, plan_scale_up, ScaleStep};
pub use error::{ProvisionerError, Result};
pub use kind::{ProvisionerKind, UnknownKind};
pub use provisioner::{NodePoolProvisioner, Provisioner};

// Re-export commonly used types from dependencies for convenience
pub use fleet_nodepool::{NodePoolClient, NodePoolId, NodePoolState};
