//! Count value object for whole-number attributes (seats, speed, rooms)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::validate;
use crate::error::DomainError;

/// A non-negative whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Count(u32);

impl Count {
    /// Validate a signed integer argument. Negative values are `Value` errors.
    pub fn new(field: &str, value: i64) -> Result<Self, DomainError> {
        validate::non_negative_int(field, value).map(Self)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Count {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Count> for u32 {
    fn from(count: Count) -> u32 {
        count.0
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
