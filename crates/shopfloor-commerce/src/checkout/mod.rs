//! Checkout module.
//!
//! Contains the order record and the commit step that turns a cart into one.

mod flow;
mod order;

pub use flow::{checkout, next_order_id, Receipt};
pub use order::{Order, DATE_FORMAT};
