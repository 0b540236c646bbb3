use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use super::wire::{list_from_wire, FromWire};

/// One page of a paginated listing.
///
/// `total` is the backend's count of all matching records and is never
/// smaller than `items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    /// Build a page whose total is simply the number of items
    /// (for endpoints that return a bare array).
    pub fn from_items(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Deserialize)]
struct WirePage {
    items: Value,
    total: u64,
}

impl<T: FromWire> Page<T> {
    /// Map a backend `{ "items": [...], "total": n }` envelope.
    pub fn from_wire(value: Value) -> Result<Self, CoreError> {
        let wire: WirePage = serde_json::from_value(value)
            .map_err(|e| CoreError::mapping(&format!("{} page", T::ENTITY), e))?;
        let items: Vec<T> = list_from_wire(wire.items)?;
        let total = wire.total.max(items.len() as u64);
        Ok(Self { items, total })
    }
}
