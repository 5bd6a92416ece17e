//! Cart type.

use std::collections::BTreeMap;

use crate::cart::{CartLine, CartPricing};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart: product id to requested quantity.
///
/// Every stored quantity is at least one, and never more than the product's
/// stock at the time it was added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// Returns `false` and leaves the cart unchanged if the product does not
    /// have enough stock for the cart's total quantity of it.
    pub fn add(&mut self, product: &Product, quantity: u32) -> bool {
        self.try_add(product, quantity).is_ok()
    }

    /// Add `quantity` units of a product, reporting why it was refused.
    ///
    /// Returns the cart's new quantity for the product.
    pub fn try_add(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let existing = self.quantity_of(product.id);
        let new_quantity = existing
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;

        if !product.can_fulfill(new_quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: product.id,
                requested: new_quantity,
                available: product.quantity,
            });
        }

        self.items.insert(product.id, new_quantity);
        debug!(
            product_id = %product.id,
            added = quantity,
            in_cart = new_quantity,
            "cart item added"
        );
        Ok(new_quantity)
    }

    /// Remove a product from the cart. Returns the quantity it had.
    pub fn remove(&mut self, product_id: ProductId) -> Option<u32> {
        self.items.remove(&product_id)
    }

    /// Remove everything from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The requested quantities by product.
    pub fn items(&self) -> &BTreeMap<ProductId, u32> {
        &self.items
    }

    /// The requested quantity of a product, zero if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    /// Total units across all products.
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the cart against the current catalog.
    ///
    /// Fails if a product in the cart is no longer in the catalog or a total
    /// overflows.
    pub fn price(&self, catalog: &Catalog) -> Result<CartPricing, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(|(&product_id, &quantity)| {
                let product = catalog.require(product_id)?;
                let line_total = product
                    .price
                    .try_multiply(quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(CartLine {
                    product_id,
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    line_total,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total =
            Money::try_sum(lines.iter().map(|l| &l.line_total)).ok_or(CommerceError::Overflow)?;

        Ok(CartPricing { lines, total })
    }
}
