//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are sequential integers assigned by the
//! storage layer.

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
        pub struct $name(i64);

        impl $name {
            /// Placeholder carried by entities not yet persisted
            pub const UNASSIGNED: Self = Self(0);

            /// Wrap a raw integer ID
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Whether storage has assigned this ID
            pub const fn is_assigned(&self) -> bool {
                self.0 > 0
            }

            /// The ID that follows this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// Parse an ID from either the bare number or the prefixed form
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
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

define_id!(HouseholdId, "hh-");
define_id!(CategoryId, "cat-");
define_id!(TransactionId, "txn-");
define_id!(RecurringExpenseId, "rec-");
define_id!(OverrideId, "ovr-");
