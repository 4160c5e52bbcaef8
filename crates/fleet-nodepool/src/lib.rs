//! Node pool management API client for the fleet autoscaler.
//!
//! This crate provides access to remote node pools:
//!
//! - [`NodePoolState`] snapshots read from the management API
//! - The [`NodePoolClient`] trait used by provisioners
//! - [`RancherNodePoolClient`], an HTTP implementation with CA-pinned or
//!   insecure TLS
//!
//! Reads are awaited by the caller. Updates issued through
//! [`NodePoolClient::request_update`] run detached and their outcome is not
//! reported back.
//!
//! # Example
//!
//! ```no_run
//! use fleet_nodepool::{
//!     quantity_update, ClientOptions, NodePoolClient, NodePoolId, RancherNodePoolClient,
//!     TrustMode,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ClientOptions::new(
//!     "https://rancher.example.com",
//!     "token-abc12:secret",
//!     TrustMode::Insecure,
//! );
//! let client = RancherNodePoolClient::new(&options)?;
//!
//! let pool = client.fetch_by_id(&NodePoolId::new("c-abc12:np-xyz34")).await?;
//! client.request_update(&pool, quantity_update(pool.quantity + 1));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use client::{
    normalize_api_url, ClientOptions, NodePoolClient, RancherNodePoolClient, TrustMode,
    API_VERSION_SUFFIX,
};
pub use error::{NodePoolError, Result};
pub use types::{quantity_update, NodePoolId, NodePoolState, UpdateFields, QUANTITY_FIELD};

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockNodePoolClient, RecordedUpdate};
