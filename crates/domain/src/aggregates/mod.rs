//! Aggregate roots - the property hierarchy
//!
//! Each aggregate:
//! - Keeps its fields private and validates every mutation
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Class-based pattern | Rustic Equivalent |
//! |---------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Subclass overriding a method | `Asset` trait with a provided method |
//! | Calling `super` | Wrapping the base `Property` by value |
//! | Base-class reference | `Box<dyn Asset>` or the closed `AnyAsset` enum |

pub mod asset;
pub mod auto;
pub mod house;
pub mod property;

pub use asset::{AnyAsset, Asset};
pub use auto::{Auto, PREMIUM_BRAND, PREMIUM_MULTIPLIER};
pub use house::House;
pub use property::Property;
