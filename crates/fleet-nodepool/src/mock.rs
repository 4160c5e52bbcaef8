//! In-memory node pool client for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::NodePoolClient;
use crate::error::{NodePoolError, Result};
use crate::types::{NodePoolId, NodePoolState, UpdateFields};

/// An update request captured by [`MockNodePoolClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    /// Snapshot the update was requested against.
    pub pool: NodePoolState,
    /// Requested field changes.
    pub fields: UpdateFields,
}

impl RecordedUpdate {
    /// The requested quantity, if the update sets one.
    #[must_use]
    pub fn quantity(&self) -> Option<i64> {
        self.fields.get(crate::types::QUANTITY_FIELD).copied()
    }
}

#[derive(Default)]
struct MockState {
    pools: HashMap<NodePoolId, NodePoolState>,
    fail_fetch: bool,
    fetches: usize,
    updates: Vec<RecordedUpdate>,
}

/// A mock client that keeps node pools in memory.
///
/// Update requests are recorded synchronously but never applied, so the
/// stored quantity only changes through [`MockNodePoolClient::set_quantity`].
#[derive(Default)]
pub struct MockNodePoolClient {
    state: Mutex<MockState>,
}

impl MockNodePoolClient {
    /// Create an empty mock client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client holding a single pool.
    #[must_use]
    pub fn with_pool(pool: NodePoolState) -> Self {
        let client = Self::new();
        client.insert_pool(pool);
        client
    }

    /// Insert or replace a pool.
    pub fn insert_pool(&self, pool: NodePoolState) {
        self.state.lock().pools.insert(pool.id.clone(), pool);
    }

    /// Set the quantity of an existing pool.
    pub fn set_quantity(&self, id: &NodePoolId, quantity: i64) {
        if let Some(pool) = self.state.lock().pools.get_mut(id) {
            pool.quantity = quantity;
        }
    }

    /// Make every subsequent fetch fail with a backend error.
    pub fn fail_fetches(&self, fail: bool) {
        self.state.lock().fail_fetch = fail;
    }

    /// Number of fetches performed.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.state.lock().fetches
    }

    /// All update requests received so far.
    #[must_use]
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.state.lock().updates.clone()
    }

    /// Number of update requests received so far.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.state.lock().updates.len()
    }
}

#[async_trait]
impl NodePoolClient for MockNodePoolClient {
    async fn fetch_by_id(&self, id: &NodePoolId) -> Result<NodePoolState> {
        let mut state = self.state.lock();
        state.fetches += 1;

        if state.fail_fetch {
            return Err(NodePoolError::Status {
                status: 503,
                message: "backend unavailable".to_string(),
            });
        }

        state
            .pools
            .get(id)
            .cloned()
            .ok_or_else(|| NodePoolError::NotFound(id.clone()))
    }

    fn request_update(&self, pool: &NodePoolState, fields: UpdateFields) {
        self.state.lock().updates.push(RecordedUpdate {
            pool: pool.clone(),
            fields,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quantity_update;

    #[tokio::test]
    async fn mock_fetch_and_record() {
        let id = NodePoolId::new("np-1");
        let client = MockNodePoolClient::with_pool(NodePoolState::new(id.clone(), 2));

        let pool = client.fetch_by_id(&id).await.unwrap();
        assert_eq!(pool.quantity, 2);
        assert_eq!(client.fetch_count(), 1);

        client.request_update(&pool, quantity_update(3));
        assert_eq!(client.update_count(), 1);
        assert_eq!(client.updates()[0].quantity(), Some(3));

        // Updates are recorded, not applied.
        assert_eq!(client.fetch_by_id(&id).await.unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn mock_failures() {
        let id = NodePoolId::new("np-1");
        let client = MockNodePoolClient::new();
        assert!(matches!(
            client.fetch_by_id(&id).await,
            Err(NodePoolError::NotFound(_))
        ));

        client.insert_pool(NodePoolState::new(id.clone(), 1));
        client.fail_fetches(true);
        assert!(client.fetch_by_id(&id).await.is_err());

        client.fail_fetches(false);
        client.set_quantity(&id, 7);
        assert_eq!(client.fetch_by_id(&id).await.unwrap().quantity, 7);
        assert_eq!(client.fetch_count(), 3);
    }
}
