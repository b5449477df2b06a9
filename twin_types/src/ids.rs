//! Unique identifiers for twin instances

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a twin instance
///
/// A twin id names one logical object across both spaces. It is minted in
/// the design space when the twin is constructed; the run space only imports
/// ids it receives over the channel and never mints its own. Ids are never
/// reused within a space's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwinId(Uuid);

impl TwinId {
    /// Mints a new random twin ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a twin ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TwinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TwinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Twin({})", self.0)
    }
}
