//! Non-negative real measurements (durations in minutes, sizes in centimetres)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::validate;
use crate::error::DomainError;

/// A finite real number >= 0
///
/// `field` arguments name the quantity in error messages (e.g. `"Length"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Measure(f64);

impl Measure {
    pub fn new(field: &str, value: f64) -> Result<Self, DomainError> {
        validate::non_negative_real(field, value).map(Self)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Grow by a non-negative amount.
    pub fn extend(self, field: &str, amount: f64) -> Result<Self, DomainError> {
        let amount = validate::non_negative_real(field, amount)?;
        let total = self.0 + amount;
        if !total.is_finite() {
            return Err(DomainError::invalid_value(format!(
                "{} {} cannot grow by {}: result is out of range",
                field, self.0, amount
            )));
        }
        Ok(Self(total))
    }

    /// Shrink by a non-negative amount no larger than the current value.
    pub fn shrink(self, field: &str, amount: f64) -> Result<Self, DomainError> {
        let amount = validate::non_negative_real(field, amount)?;
        validate::within(field, amount, self.0)?;
        // Clamp away a -0.0 from exact subtraction of equal values
        Ok(Self((self.0 - amount).max(0.0)))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Measure {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("Measure", value)
    }
}

impl From<Measure> for f64 {
    fn from(measure: Measure) -> f64 {
        measure.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn m(value: f64) -> Measure {
        Measure::new("Length", value).expect("valid measure")
    }

    #[test]
    fn test_negative_is_value_error() {
        assert_eq!(
            Measure::new("Width", -0.1).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
    }

    #[test]
    fn test_extend() {
        assert_eq!(m(2.5).extend("Length", 1.5), Ok(m(4.0)));
        assert_eq!(m(2.5).extend("Length", 0.0), Ok(m(2.5)));
    }

    #[test]
    fn test_shrink_to_zero() {
        let shrunk = m(9.5).shrink("Length", 9.5).expect("exact shrink");
        assert_eq!(shrunk.value(), 0.0);
        assert!(shrunk.value().is_sign_positive());
    }

    #[test]
    fn test_shrink_past_zero_fails() {
        let err = m(2.0).shrink("Length", 2.5).expect_err("too much");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_shrink_negative_amount_fails() {
        let err = m(2.0).shrink("Length", -1.0).expect_err("negative");
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
