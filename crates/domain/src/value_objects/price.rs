//! Price value object
//!
//! A price is always a finite, non-negative real number. Whether a *new*
//! price may be zero is a rule of the caller: the property setter demands a
//! strictly positive price while `reset_price` produces exactly zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::validate;
use crate::error::DomainError;

/// A finite, non-negative amount of money (roubles)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting non-finite (`Type`) and negative (`Value`) amounts.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        validate::non_negative_real("Price", amount).map(Self)
    }

    /// Create a price that must also be strictly positive.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if `amount` is NaN or infinite
    /// - `DomainError::Value` if `amount <= 0`
    pub fn positive(amount: f64) -> Result<Self, DomainError> {
        validate::positive_real("Price", amount).map(Self)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Add `amount` to this price. The result must still be finite.
    pub fn plus(self, amount: f64) -> Result<Self, DomainError> {
        let total = self.0 + amount;
        if !total.is_finite() {
            return Err(DomainError::invalid_value(format!(
                "Price {} cannot grow by {}: result is out of range",
                self.0, amount
            )));
        }
        Self::new(total)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_accepts_zero() {
        let price = Price::new(0.0).expect("zero is a valid price");
        assert!(price.is_zero());
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        for bad in [0.0, -0.5, -1000.0] {
            assert_eq!(
                Price::positive(bad).map_err(|e| e.kind()),
                Err(ErrorKind::Value)
            );
        }
    }

    #[test]
    fn test_non_finite_is_type_error() {
        assert_eq!(
            Price::new(f64::NAN).map_err(|e| e.kind()),
            Err(ErrorKind::Type)
        );
    }

    #[test]
    fn test_plus() {
        let price = Price::positive(1000.0).expect("valid");
        assert_eq!(price.plus(150.0).map(Price::value), Ok(1150.0));
    }

    #[test]
    fn test_plus_overflow() {
        let price = Price::positive(f64::MAX).expect("valid");
        let err = price.plus(f64::MAX).expect_err("overflow");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-3.0").is_err());
        let price: Price = serde_json::from_str("0").expect("zero deserializes");
        assert!(price.is_zero());
    }
}
