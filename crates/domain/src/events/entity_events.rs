//! Outcomes of song, photo, and car mutations

use serde::Serialize;

use crate::value_objects::{Count, Measure};

/// A song's length moved from one value to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthChange {
    pub from: Measure,
    pub to: Measure,
}

/// Outcome of modifying a photo
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhotoUpdate {
    /// Photo was cropped to the given dimensions
    Cropped { width: Measure, length: Measure },
    /// Width and length swapped places
    Turned { width: Measure, length: Measure },
    /// Photo was black-and-white and is now in colour
    MadeColorful,
    /// Photo was already in colour, no effect
    AlreadyColorful,
}

/// Outcome of stopping a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopOutcome {
    /// Car was moving and is now stationary
    Stopped { from_speed: Count },
    /// Car was not moving, no effect
    AlreadyStopped,
}
