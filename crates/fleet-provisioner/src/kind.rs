//! Provisioner variant tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a provisioner implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ProvisionerKind {
    /// Scales a Rancher-managed node pool.
    RancherNodePool,
}

impl ProvisionerKind {
    /// The tag used in configuration and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RancherNodePool => "ranchernodepool",
        }
    }
}

impl fmt::Display for ProvisionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown provisioner tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provisioner kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ProvisionerKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ranchernodepool" => Ok(Self::RancherNodePool),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
