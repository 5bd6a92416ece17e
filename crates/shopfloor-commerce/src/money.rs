//! Money type for representing prices and totals.
//!
//! The store works in a single unit and never formats currency; an amount is
//! a plain integer. Arithmetic is checked so totals cannot silently wrap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in the store's unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
