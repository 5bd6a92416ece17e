//! Newtype IDs for type-safe identifiers.
//!
//! Products and orders are both numbered with plain integers in the store
//! file; the newtypes keep them from being swapped in code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A sequential numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from its number.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw number.
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// The ID that follows this one.
            pub fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_next() {
        assert_eq!(OrderId::new(1).next(), OrderId::new(2));
        assert_eq!(OrderId::new(u64::MAX).next(), OrderId::new(u64::MAX));
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", OrderId::new(9)), "9");
    }
}
