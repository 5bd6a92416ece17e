//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog, cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Not enough stock to satisfy a request.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(feature = "storage")]
impl From<shopfloor_db::DbError> for CommerceError {
    fn from(e: shopfloor_db::DbError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}
