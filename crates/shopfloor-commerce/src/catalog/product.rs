//! Product type and its stock checks.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity in stock.
    pub quantity: u32,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Check if a specific quantity can be taken from stock.
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Take `quantity` units out of stock.
    ///
    /// Leaves the stock unchanged on failure.
    pub fn take(&mut self, quantity: u32) -> Result<(), CommerceError> {
        if !self.can_fulfill(quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: self.id,
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Format a catalog listing line with the price unit appended.
    pub fn listing(&self, unit: &str) -> String {
        format!(
            "{}: {} - {} {} ({} in stock)",
            self.id, self.name, self.price, unit, self.quantity
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({} in stock)",
            self.id, self.name, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product::new(ProductId::new(3), "Headphones", Money::new(3_000_000), 20)
    }

    #[test]
    fn test_can_fulfill_boundary() {
        let p = headphones();
        assert!(p.can_fulfill(20));
        assert!(!p.can_fulfill(21));
        assert!(p.can_fulfill(0));
    }

    #[test]
    fn test_take_decrements() {
        let mut p = headphones();
        p.take(5).unwrap();
        assert_eq!(p.quantity, 15);
        p.take(15).unwrap();
        assert!(p.is_out_of_stock());
    }

    #[test]
    fn test_take_too_many_leaves_stock() {
        let mut p = headphones();
        let err = p.take(21).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InsufficientStock {
                requested: 21,
                available: 20,
                ..
            }
        ));
        assert_eq!(p.quantity, 20);
    }

    #[test]
    fn test_listing() {
        let p = headphones();
        assert_eq!(p.to_string(), "3: Headphones - 3000000 (20 in stock)");
        assert_eq!(
            p.listing("Toman"),
            "3: Headphones - 3000000 Toman (20 in stock)"
        );
    }

    #[test]
    fn test_store_file_shape() {
        let json = serde_json::to_value(headphones()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Headphones",
                "price": 3000000,
                "quantity": 20
            })
        );
    }
}
