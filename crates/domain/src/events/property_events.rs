//! Property-related domain events
//!
//! These types communicate what happened when a property's state was
//! modified, allowing callers to react appropriately.

use serde::Serialize;

use crate::value_objects::{Owner, Price};

/// A price moved from one value to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    pub from: Price,
    pub to: Price,
}

impl PriceChange {
    /// How much the price grew (negative when it dropped).
    pub fn delta(&self) -> f64 {
        self.to.value() - self.from.value()
    }

    /// True when the price ended where it started (e.g. a house with no rooms).
    pub fn is_unchanged(&self) -> bool {
        self.from == self.to
    }
}

/// Ownership passed from one owner to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerChange {
    pub from: Owner,
    pub to: Owner,
}
