//! Domain Events
//!
//! Return types from entity and aggregate mutations, communicating what
//! happened when state was modified.

pub mod entity_events;
pub mod property_events;

pub use entity_events::*;
pub use property_events::*;
