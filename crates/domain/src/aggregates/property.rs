//! Property aggregate - something with an owner and a price
//!
//! # Invariants
//!
//! - `price` is always finite and non-negative (enforced by `Price`)
//! - A new price set through [`Property::set_price`] or given to
//!   [`Property::new`] must be strictly positive
//! - [`Property::reset_price`] is the only way to reach a price of zero
//!
//! Price growth goes through the [`Asset`](super::Asset) trait so that
//! `Auto` and `House` can scale the amount being added.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::common::json::{as_real, json_type_name};
use crate::common::{validate, FieldReader};
use crate::error::DomainError;
use crate::events::{OwnerChange, PriceChange};
use crate::value_objects::{Owner, Price};

/// A piece of property belonging to someone
///
/// # Example
///
/// ```
/// use labkit_domain::aggregates::{Asset, Property};
///
/// let mut property = Property::new("Kukushkina L. D.", 2_000_560.5).unwrap();
/// property.increase_price(100_000.5).unwrap();
/// assert_eq!(property.price().value(), 2_100_561.0);
///
/// property.reset_price();
/// assert!(property.price().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    owner: Owner,
    price: Price,
}

impl Property {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a property owned by `owner` and worth `price`.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if `price` is NaN or infinite
    /// - `DomainError::Value` if `price <= 0`
    pub fn new(owner: impl Into<Owner>, price: f64) -> Result<Self, DomainError> {
        Ok(Self {
            owner: owner.into(),
            price: Price::positive(price)?,
        })
    }

    /// Build from a JSON object with `owner` (string) and `price` (number).
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        Self::from_fields(&FieldReader::new("Property", value)?)
    }

    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Result<Self, DomainError> {
        Self::new(fields.string("owner")?, fields.real("price")?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Hand the property over to a new owner.
    pub fn set_owner(&mut self, owner: impl Into<Owner>) -> OwnerChange {
        let from = std::mem::replace(&mut self.owner, owner.into());
        OwnerChange {
            from,
            to: self.owner.clone(),
        }
    }

    /// Set the owner from untyped input; anything but a string is a `Type` error.
    pub fn set_owner_value(&mut self, value: &Value) -> Result<OwnerChange, DomainError> {
        let owner = owner_from_value(value)?;
        Ok(self.set_owner(owner))
    }

    /// Set a new, strictly positive price.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if `price` is NaN or infinite
    /// - `DomainError::Value` if `price <= 0`
    pub fn set_price(&mut self, price: f64) -> Result<PriceChange, DomainError> {
        let to = Price::positive(price)?;
        Ok(self.replace_price(to))
    }

    /// Set the price from untyped input; anything but a number is a `Type` error.
    pub fn set_price_value(&mut self, value: &Value) -> Result<PriceChange, DomainError> {
        self.set_price(price_from_value(value)?)
    }

    /// Drop the price to exactly zero, whatever it was.
    pub fn reset_price(&mut self) -> PriceChange {
        self.replace_price(Price::zero())
    }

    /// Apply the `owner` and `price` keys of a JSON object, if present.
    ///
    /// Both keys are validated before either is applied, so a failed update
    /// leaves the property untouched. Other keys are ignored.
    pub fn update_from_json(&mut self, patch: &Value) -> Result<(), DomainError> {
        let fields = FieldReader::new("Property", patch)?;
        let owner = fields.get("owner").map(owner_from_value).transpose()?;
        let price = fields
            .get("price")
            .map(|v| price_from_value(v).and_then(Price::positive))
            .transpose()?;

        if let Some(owner) = owner {
            self.set_owner(owner);
        }
        if let Some(price) = price {
            self.replace_price(price);
        }
        Ok(())
    }

    /// Grow the price by `amount * multiplier`.
    ///
    /// `amount` must be a positive real; the multiplier is supplied by the
    /// asset variant and is never negative.
    pub(crate) fn add_to_price(
        &mut self,
        amount: f64,
        multiplier: f64,
    ) -> Result<PriceChange, DomainError> {
        let amount = validate::positive_real("Additional price", amount)?;
        let to = self.price.plus(amount * multiplier)?;
        Ok(self.replace_price(to))
    }

    fn replace_price(&mut self, to: Price) -> PriceChange {
        let from = std::mem::replace(&mut self.price, to);
        PriceChange { from, to }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner: {}. Price: {}", self.owner, self.price)
    }
}

fn owner_from_value(value: &Value) -> Result<Owner, DomainError> {
    match value {
        Value::String(s) => Ok(Owner::new(s.as_str())),
        other => Err(DomainError::type_mismatch(format!(
            "Owner must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

fn price_from_value(value: &Value) -> Result<f64, DomainError> {
    as_real(value).ok_or_else(|| {
        DomainError::type_mismatch(format!(
            "Price must be a real number, got {}",
            json_type_name(value)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::Asset;
    use crate::error::ErrorKind;
    use proptest::prelude::*;
    use serde_json::json;

    fn property(price: f64) -> Property {
        Property::new("Kukushkina L. D.", price).expect("valid property")
    }

    #[test]
    fn test_new_stores_arguments() {
        let p = property(2_000_560.0);
        assert_eq!(p.owner().as_str(), "Kukushkina L. D.");
        assert_eq!(p.price().value(), 2_000_560.0);
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        assert_eq!(
            Property::new("me", 0.0).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
        assert_eq!(
            Property::new("me", -10.0).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
    }

    #[test]
    fn test_new_rejects_non_finite_price() {
        assert_eq!(
            Property::new("me", f64::NAN).map_err(|e| e.kind()),
            Err(ErrorKind::Type)
        );
    }

    #[test]
    fn test_set_owner() {
        let mut p = property(10.0);
        let change = p.set_owner("Ivanov I. I.");
        assert_eq!(change.from.as_str(), "Kukushkina L. D.");
        assert_eq!(change.to.as_str(), "Ivanov I. I.");
        assert_eq!(p.owner().as_str(), "Ivanov I. I.");
    }

    #[test]
    fn test_set_owner_value_requires_string() {
        let mut p = property(10.0);
        let err = p.set_owner_value(&json!(42)).expect_err("number is not a string");
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(p.owner().as_str(), "Kukushkina L. D.");

        p.set_owner_value(&json!("Petrov P. P.")).expect("string owner");
        assert_eq!(p.owner().as_str(), "Petrov P. P.");
    }

    #[test]
    fn test_set_price_value_requires_number() {
        let mut p = property(10.0);
        let err = p.set_price_value(&json!("cheap")).expect_err("string price");
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = p.set_price_value(&json!(-1.0)).expect_err("negative price");
        assert_eq!(err.kind(), ErrorKind::Value);
        p.set_price_value(&json!(25.5)).expect("valid price");
        assert_eq!(p.price().value(), 25.5);
    }

    #[test]
    fn test_set_price_rejects_non_finite() {
        let mut p = property(10.0);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(p.set_price(bad).map_err(|e| e.kind()), Err(ErrorKind::Type));
        }
        assert_eq!(p.price().value(), 10.0);
    }

    #[test]
    fn test_reset_price() {
        let mut p = property(500.0);
        let change = p.reset_price();
        assert_eq!(change.from.value(), 500.0);
        assert!(p.price().is_zero());
    }

    #[test]
    fn test_increase_after_reset() {
        let mut p = property(500.0);
        p.reset_price();
        p.increase_price(12.5).expect("positive amount");
        assert_eq!(p.price().value(), 12.5);
    }

    #[test]
    fn test_increase_price_errors() {
        let mut p = property(500.0);
        assert_eq!(
            p.increase_price(0.0).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
        assert_eq!(
            p.increase_price(f64::INFINITY).map_err(|e| e.kind()),
            Err(ErrorKind::Type)
        );
        assert_eq!(p.price().value(), 500.0);
    }

    #[test]
    fn test_display() {
        let p = Property::new("me", 2_000_560.5).expect("valid property");
        assert_eq!(p.to_string(), "Owner: me. Price: 2000560.5");
    }

    #[test]
    fn test_from_json() {
        let p = Property::from_json(&json!({"owner": "me", "price": 3524345}))
            .expect("valid json");
        assert_eq!(p.price().value(), 3_524_345.0);

        let err = Property::from_json(&json!({"owner": ["me"], "price": 1.0}))
            .expect_err("array owner");
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_update_from_json_is_all_or_nothing() {
        let mut p = property(100.0);
        let err = p
            .update_from_json(&json!({"owner": "new", "price": 0.0}))
            .expect_err("zero price");
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(p.owner().as_str(), "Kukushkina L. D.");

        p.update_from_json(&json!({"owner": "new", "price": 7.0, "colour": "red"}))
            .expect("valid patch");
        assert_eq!(p.owner().as_str(), "new");
        assert_eq!(p.price().value(), 7.0);
    }

    proptest! {
        #[test]
        fn prop_set_price_rejects_non_positive(bad in -1.0e12f64..=0.0) {
            let mut p = property(100.0);
            prop_assert_eq!(p.set_price(bad).map_err(|e| e.kind()), Err(ErrorKind::Value));
            prop_assert_eq!(p.price().value(), 100.0);
        }

        #[test]
        fn prop_reset_always_zero(start in 0.01f64..1.0e12) {
            let mut p = property(start);
            p.reset_price();
            prop_assert!(p.price().is_zero());
        }

        #[test]
        fn prop_increase_adds_amount(start in 0.01f64..1.0e9, amount in 0.01f64..1.0e9) {
            let mut p = property(start);
            p.increase_price(amount).expect("positive amount");
            prop_assert_eq!(p.price().value(), start + amount);
        }
    }
}
