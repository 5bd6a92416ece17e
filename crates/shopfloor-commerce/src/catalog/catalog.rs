//! The in-memory product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// An ordered collection of products, in store-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded product records.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The starter catalog used when a store has no products yet.
    pub fn sample() -> Self {
        Self::from_products(vec![
            Product::new(ProductId::new(1), "Laptop", Money::new(25_000_000), 10),
            Product::new(ProductId::new(2), "Mobile", Money::new(15_000_000), 15),
            Product::new(ProductId::new(3), "Headphones", Money::new(3_000_000), 20),
        ])
    }

    /// Consume the catalog and return its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get a mutable product by ID.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Get a product by ID or fail with `ProductNotFound`.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Take `quantity` units of a product out of stock.
    pub fn decrement_stock(&mut self, id: ProductId, quantity: u32) -> Result<(), CommerceError> {
        self.get_mut(id)
            .ok_or(CommerceError::ProductNotFound(id))?
            .take(quantity)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
