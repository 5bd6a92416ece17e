//! Order records.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, ProductId};
use crate::money::Money;

/// Format of [`Order::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A committed order.
///
/// Orders are snapshots: once appended to the store they are never edited.
/// `items` serializes as a JSON object keyed by product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Sequential order number.
    pub id: OrderId,
    /// Product id to quantity, as in the cart at checkout.
    pub items: BTreeMap<ProductId, u32>,
    /// Amount charged.
    pub total: Money,
    /// Local time of checkout, formatted with [`DATE_FORMAT`].
    pub date: String,
}

impl Order {
    /// Create an order dated at `placed_at`.
    pub fn new<Tz>(
        id: OrderId,
        items: BTreeMap<ProductId, u32>,
        total: Money,
        placed_at: DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id,
            items,
            total,
            date: placed_at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Get total item count.
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }
}
