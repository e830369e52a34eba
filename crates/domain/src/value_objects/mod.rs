//! Value objects - Immutable objects defined by their attributes

mod measure;
mod names;
mod price;
mod quantity;

pub use measure::Measure;
pub use names::{Brand, Owner};
pub use price::Price;
pub use quantity::Count;
