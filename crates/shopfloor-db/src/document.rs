//! The persisted document shape.

use serde::{Deserialize, Serialize};

/// The whole persisted store: three named collections.
///
/// `users` is carried through opaquely; nothing in shopfloor reads it, but a
/// file written by another tool keeps its users after a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize, O: Serialize",
    deserialize = "P: Deserialize<'de>, O: Deserialize<'de>"
))]
pub struct StoreDocument<P, O> {
    /// User records.
    #[serde(default)]
    pub users: Vec<serde_json::Value>,
    /// Product records.
    #[serde(default)]
    pub products: Vec<P>,
    /// Order records, oldest first.
    #[serde(default)]
    pub orders: Vec<O>,
}

impl<P, O> StoreDocument<P, O> {
    /// An empty document.
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
        }
    }
}

impl<P, O> Default for StoreDocument<P, O> {
    fn default() -> Self {
        Self::empty()
    }
}
