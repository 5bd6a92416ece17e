//! Committing a cart as an order.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{Cart, CartPricing};
use crate::catalog::Catalog;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::OrderId;

/// The result of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// The appended order.
    pub order: Order,
    /// The priced cart the order was made from.
    pub pricing: CartPricing,
}

/// The id the next appended order gets.
pub fn next_order_id(orders: &[Order]) -> OrderId {
    orders
        .iter()
        .map(|o| o.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(OrderId::new(1))
}

/// Commit the cart: take its quantities out of stock, append an order and
/// empty the cart.
///
/// Every line is checked against stock before anything changes, so on error
/// the catalog, orders and cart are left as they were. Persisting the result
/// is up to the caller.
pub fn checkout<Tz>(
    catalog: &mut Catalog,
    orders: &mut Vec<Order>,
    cart: &mut Cart,
    now: DateTime<Tz>,
) -> Result<Receipt, CommerceError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let pricing = cart.price(catalog)?;

    for line in &pricing.lines {
        let product = catalog.require(line.product_id)?;
        if !product.can_fulfill(line.quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: line.product_id,
                requested: line.quantity,
                available: product.quantity,
            });
        }
    }

    for line in &pricing.lines {
        catalog.decrement_stock(line.product_id, line.quantity)?;
    }

    let order = Order::new(
        next_order_id(orders),
        cart.items().clone(),
        pricing.total,
        now,
    );
    orders.push(order.clone());
    cart.clear();

    info!(
        order_id = %order.id,
        items = order.item_count(),
        total = %order.total,
        "order committed"
    );

    Ok(Receipt { order, pricing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::Money;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 14, 0, 0).unwrap()
    }

    fn cart_with(catalog: &Catalog, wanted: &[(u64, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, qty) in wanted {
            let product = catalog.get(ProductId::new(id)).unwrap();
            assert!(cart.add(product, qty));
        }
        cart
    }

    #[test]
    fn test_checkout_commits_order() {
        let mut catalog = Catalog::sample();
        let mut orders = Vec::new();
        let mut cart = cart_with(&catalog, &[(1, 2), (3, 4)]);

        let receipt = checkout(&mut catalog, &mut orders, &mut cart, now()).unwrap();

        assert_eq!(receipt.order.id, OrderId::new(1));
        assert_eq!(receipt.order.total, Money::new(62_000_000));
        assert_eq!(receipt.order.date, "2024-05-17 14:00:00");
        assert_eq!(
            receipt.order.items,
            BTreeMap::from([(ProductId::new(1), 2), (ProductId::new(3), 4)])
        );

        assert_eq!(catalog.get(ProductId::new(1)).unwrap().quantity, 8);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().quantity, 15);
        assert_eq!(catalog.get(ProductId::new(3)).unwrap().quantity, 16);

        assert_eq!(orders, vec![receipt.order.clone()]);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_ids_are_sequential() {
        let mut catalog = Catalog::sample();
        let mut orders = Vec::new();

        for expected in 1..=3 {
            let mut cart = cart_with(&catalog, &[(2, 1)]);
            let receipt = checkout(&mut catalog, &mut orders, &mut cart, now()).unwrap();
            assert_eq!(receipt.order.id, OrderId::new(expected));
        }
        assert_eq!(orders.len(), 3);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().quantity, 12);
    }

    #[test]
    fn test_next_order_id_follows_highest() {
        assert_eq!(next_order_id(&[]), OrderId::new(1));

        let orders = vec![
            Order::new(OrderId::new(5), BTreeMap::new(), Money::zero(), now()),
            Order::new(OrderId::new(2), BTreeMap::new(), Money::zero(), now()),
        ];
        assert_eq!(next_order_id(&orders), OrderId::new(6));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut catalog = Catalog::sample();
        let mut orders = Vec::new();
        let mut cart = Cart::new();

        let result = checkout(&mut catalog, &mut orders, &mut cart, now());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
        assert!(orders.is_empty());
        assert_eq!(catalog, Catalog::sample());
    }

    #[test]
    fn test_checkout_stock_shortfall_changes_nothing() {
        let mut catalog = Catalog::sample();
        let mut orders = Vec::new();
        let mut cart = cart_with(&catalog, &[(1, 1), (2, 10)]);

        // Stock drops after the items were added.
        catalog.get_mut(ProductId::new(2)).unwrap().quantity = 3;
        let before = catalog.clone();

        let result = checkout(&mut catalog, &mut orders, &mut cart, now());
        assert!(matches!(
            result,
            Err(CommerceError::InsufficientStock {
                requested: 10,
                available: 3,
                ..
            })
        ));
        assert_eq!(catalog, before);
        assert!(orders.is_empty());
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_checkout_product_removed_from_catalog() {
        let mut catalog = Catalog::sample();
        let mut orders = Vec::new();
        let mut cart = Cart::new();
        cart.add(&Product::new(ProductId::new(8), "Ghost", Money::new(1), 1), 1);

        let result = checkout(&mut catalog, &mut orders, &mut cart, now());
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
        assert!(!cart.is_empty());
    }
}
