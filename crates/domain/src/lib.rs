extern crate self as labkit_domain;

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::{AnyAsset, Asset, Auto, House, Property};
pub use entities::{Car, Photo, Song};
pub use error::{DomainError, ErrorKind};
pub use events::{LengthChange, OwnerChange, PhotoUpdate, PriceChange, StopOutcome};
pub use value_objects::{Brand, Count, Measure, Owner, Price};
