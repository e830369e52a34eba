//! Auto aggregate - a property that is a car of some brand

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::{Asset, Property};
use crate::common::FieldReader;
use crate::error::DomainError;
use crate::value_objects::{Brand, Owner};

/// Brand whose price increases are worth more
pub const PREMIUM_BRAND: &str = "audi";

/// Multiplier applied to price increases of a [`PREMIUM_BRAND`] auto
pub const PREMIUM_MULTIPLIER: f64 = 1.5;

/// A car owned as property
///
/// Price increases are multiplied by [`PREMIUM_MULTIPLIER`] when the brand
/// is exactly [`PREMIUM_BRAND`] (case-sensitive).
///
/// # Example
///
/// ```
/// use labkit_domain::aggregates::{Asset, Auto};
///
/// let mut auto = Auto::new("me", 1000.0, "audi").unwrap();
/// auto.increase_price(100.0).unwrap();
/// assert_eq!(auto.property().price().value(), 1150.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Auto {
    #[serde(flatten)]
    property: Property,
    brand: Brand,
}

impl Auto {
    pub fn new(
        owner: impl Into<Owner>,
        price: f64,
        brand: impl Into<Brand>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            property: Property::new(owner, price)?,
            brand: brand.into(),
        })
    }

    /// Build from a JSON object with `owner`, `price`, and `brand`.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("Auto", value)?;
        Ok(Self {
            property: Property::from_fields(&fields)?,
            brand: Brand::new(fields.string("brand")?),
        })
    }

    #[inline]
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: impl Into<Brand>) {
        self.brand = brand.into();
    }

    /// True if price increases on this auto get the premium multiplier.
    pub fn is_premium(&self) -> bool {
        self.brand.is(PREMIUM_BRAND)
    }
}

impl Asset for Auto {
    fn property(&self) -> &Property {
        &self.property
    }

    fn property_mut(&mut self) -> &mut Property {
        &mut self.property
    }

    fn price_multiplier(&self) -> f64 {
        if self.is_premium() {
            PREMIUM_MULTIPLIER
        } else {
            1.0
        }
    }
}

impl fmt::Display for Auto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Brand: {}", self.property, self.brand)
    }
}
