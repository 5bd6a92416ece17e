//! Whole-document JSON persistence for shopfloor.
//!
//! The store keeps three named collections (`users`, `products`, `orders`)
//! in a single JSON file. The file is read once on start and rewritten in
//! full after every change that has to survive a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfloor_db::{JsonStore, StoreDocument};
//!
//! let store = JsonStore::open("store_data.json");
//! let mut doc: StoreDocument<Product, Order> = store.load()?;
//! doc.orders.push(order);
//! store.save(&doc)?;
//! ```

mod document;
mod error;
mod store;

pub use document::StoreDocument;
pub use error::DbError;
pub use store::JsonStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{DbError, JsonStore, StoreDocument};
}
