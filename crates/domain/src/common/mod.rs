//! Common helpers shared by every entity.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **One rule per helper** - entities compose them instead of repeating checks

pub mod json;
pub mod validate;

pub use json::FieldReader;
