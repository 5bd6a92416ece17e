//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing for a whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// One line per product, ordered by product id.
    pub lines: Vec<CartLine>,
    /// Sum of all line totals.
    pub total: Money,
}

/// A single priced cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub line_total: Money,
}

impl CartLine {
    /// Format the line as shown in the cart view.
    pub fn summary(&self, unit: &str) -> String {
        format!(
            "{} - {} pcs - {} {}",
            self.name, self.quantity, self.line_total, unit
        )
    }
}
