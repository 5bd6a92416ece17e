//! Store-backed inventory: catalog and order history loaded from, and saved
//! to, a [`JsonStore`].

use chrono::{DateTime, TimeZone};
use shopfloor_db::{JsonStore, StoreDocument};
use tracing::info;

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::checkout::{self, Order, Receipt};
use crate::error::CommerceError;

/// The persisted document with this crate's record types.
pub type Document = StoreDocument<Product, Order>;

/// The whole store held in memory, with the file it came from.
#[derive(Debug)]
pub struct Inventory {
    store: JsonStore,
    users: Vec<serde_json::Value>,
    catalog: Catalog,
    orders: Vec<Order>,
}

impl Inventory {
    /// Load the store. A missing file gives an empty inventory.
    pub fn open(store: JsonStore) -> Result<Self, CommerceError> {
        let doc: Document = store.load()?;
        Ok(Self {
            store,
            users: doc.users,
            catalog: Catalog::from_products(doc.products),
            orders: doc.orders,
        })
    }

    /// Fill an empty catalog with the sample products and save.
    ///
    /// Returns whether anything was seeded.
    pub fn seed_samples_if_empty(&mut self) -> Result<bool, CommerceError> {
        if !self.catalog.is_empty() {
            return Ok(false);
        }
        self.catalog = Catalog::sample();
        self.save()?;
        info!(products = self.catalog.len(), "seeded sample catalog");
        Ok(true)
    }

    /// Write the whole document back to the store.
    pub fn save(&self) -> Result<(), CommerceError> {
        self.store.save(&self.to_document())?;
        Ok(())
    }

    /// Commit the cart and save the store.
    pub fn checkout<Tz>(&mut self, cart: &mut Cart, now: DateTime<Tz>) -> Result<Receipt, CommerceError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let receipt = checkout::checkout(&mut self.catalog, &mut self.orders, cart, now)?;
        self.save()?;
        Ok(receipt)
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The backing store.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    fn to_document(&self) -> Document {
        StoreDocument {
            users: self.users.clone(),
            products: self.catalog.products().to_vec(),
            orders: self.orders.clone(),
        }
    }
}
