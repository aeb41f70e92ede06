//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are small integers handed out by the caller (the sample data numbers
//! them from 1). Newtype wrappers keep ids of different entities apart at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw number
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw number
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// The id following this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// Next free id after the largest of `ids` (1 when empty)
            pub fn next_after<I: IntoIterator<Item = Self>>(ids: I) -> Self {
                ids.into_iter()
                    .max()
                    .map(|id| id.next())
                    .unwrap_or(Self(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(ItemId, "item-");
define_id!(IncomeId, "inc-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ItemId::new(7)), "item-7");
        assert_eq!(format!("{}", TransactionId::new(12)), "txn-12");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!("item-3".parse::<ItemId>().unwrap(), ItemId::new(3));
        assert_eq!("3".parse::<ItemId>().unwrap(), ItemId::new(3));
        assert!("item-x".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_next_after() {
        let ids = [IncomeId::new(1), IncomeId::new(5), IncomeId::new(3)];
        assert_eq!(IncomeId::next_after(ids), IncomeId::new(6));
        assert_eq!(IncomeId::next_after(Vec::new()), IncomeId::new(1));
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new(4);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "4");
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
