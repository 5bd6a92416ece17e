//! Catalog, cart and checkout logic for shopfloor.
//!
//! - **Catalog**: products with a price and a stock quantity
//! - **Cart**: product id to requested quantity, guarded by stock
//! - **Checkout**: decrements stock and appends an order snapshot
//! - **Storage** (feature `storage`): load/save of the whole store document
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfloor_commerce::prelude::*;
//!
//! let mut catalog = Catalog::sample();
//! let mut orders = Vec::new();
//! let mut cart = Cart::new();
//!
//! let laptop = catalog.get(ProductId::new(1)).unwrap().clone();
//! assert!(cart.add(&laptop, 2));
//!
//! let receipt = checkout(&mut catalog, &mut orders, &mut cart, chrono::Local::now())?;
//! println!("Order #{} total {}", receipt.order.id, receipt.order.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

#[cfg(feature = "storage")]
pub mod storage;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing};

    // Checkout
    pub use crate::checkout::{checkout, next_order_id, Order, Receipt};

    #[cfg(feature = "storage")]
    pub use crate::storage::Inventory;
}
