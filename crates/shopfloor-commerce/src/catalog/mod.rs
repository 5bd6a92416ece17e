//! Catalog module.
//!
//! Contains the product record and the in-memory catalog.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
