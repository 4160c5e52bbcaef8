//! Node pool data model.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the node pool field holding the desired node count.
pub const QUANTITY_FIELD: &str = "quantity";

/// Partial update sent to the backend, keyed by API field name.
pub type UpdateFields = BTreeMap<String, i64>;

/// Build an update that sets the desired node count.
#[must_use]
pub fn quantity_update(quantity: i64) -> UpdateFields {
    let mut fields = UpdateFields::new();
    fields.insert(QUANTITY_FIELD.to_string(), quantity);
    fields
}

/// Opaque identifier of a remote node pool (e.g. `c-abc12:np-xyz34`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct NodePoolId(String);

impl NodePoolId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePoolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodePoolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Snapshot of one remote node pool at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolState {
    /// Stable identifier used to address the pool.
    pub id: NodePoolId,
    /// Resource name.
    #[serde(default)]
    pub name: String,
    /// Human-readable name shown in the UI.
    #[serde(default)]
    pub display_name: String,
    /// Labels attached to nodes in the pool.
    #[serde(default)]
    pub node_labels: HashMap<String, String>,
    /// Desired number of nodes in the pool.
    #[serde(default)]
    pub quantity: i64,
    /// Resource links returned by the API.
    #[serde(default)]
    pub links: HashMap<String, String>,
}

impl NodePoolState {
    /// Create a pool snapshot with the given ID and quantity.
    #[must_use]
    pub fn new(id: impl Into<NodePoolId>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            quantity,
            ..Default::default()
        }
    }

    /// The `self` link, used as the update target when present.
    #[must_use]
    pub fn self_link(&self) -> Option<&str> {
        self.links.get("self").map(String::as_str)
    }
}
