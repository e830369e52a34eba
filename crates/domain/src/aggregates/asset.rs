//! The `Asset` trait - price behavior shared by every kind of property
//!
//! `Property` is the base; `Auto` and `House` wrap one and override how much
//! a price increase is worth by supplying a [`Asset::price_multiplier`].
//! [`AnyAsset`] is the closed set of variants, for collections and JSON input.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::{Auto, House, Property};
use crate::common::FieldReader;
use crate::error::DomainError;
use crate::events::PriceChange;

/// Something that wraps a [`Property`] and decides how its price grows.
///
/// # Example
///
/// ```
/// use labkit_domain::aggregates::{Asset, Auto, House, Property};
///
/// let mut assets: Vec<Box<dyn Asset>> = vec![
///     Box::new(Property::new("me", 1000.0).unwrap()),
///     Box::new(Auto::new("me", 1000.0, "audi").unwrap()),
///     Box::new(House::new("me", 1000.0, 3).unwrap()),
/// ];
/// for asset in &mut assets {
///     asset.increase_price(100.0).unwrap();
/// }
/// let prices: Vec<f64> = assets.iter().map(|a| a.property().price().value()).collect();
/// assert_eq!(prices, vec![1100.0, 1150.0, 1300.0]);
/// ```
pub trait Asset: fmt::Display {
    fn property(&self) -> &Property;

    fn property_mut(&mut self) -> &mut Property;

    /// Factor applied to every price increase. Never negative.
    fn price_multiplier(&self) -> f64 {
        1.0
    }

    /// Raise the price by `amount * price_multiplier()`.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if `amount` is NaN or infinite
    /// - `DomainError::Value` if `amount <= 0`, or the new price is out of range
    fn increase_price(&mut self, amount: f64) -> Result<PriceChange, DomainError> {
        let multiplier = self.price_multiplier();
        self.property_mut().add_to_price(amount, multiplier)
    }
}

impl Asset for Property {
    fn property(&self) -> &Property {
        self
    }

    fn property_mut(&mut self) -> &mut Property {
        self
    }
}

/// Any of the property variants
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyAsset {
    Property(Property),
    Auto(Auto),
    House(House),
}

impl AnyAsset {
    /// Build a variant from a JSON object whose `kind` field names it.
    ///
    /// ```
    /// use labkit_domain::aggregates::AnyAsset;
    /// use serde_json::json;
    ///
    /// let asset = AnyAsset::from_json(&json!({
    ///     "kind": "house", "owner": "me", "price": 231443.13, "number_of_rooms": 7
    /// })).unwrap();
    /// assert!(matches!(asset, AnyAsset::House(_)));
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("Asset", value)?;
        match fields.string("kind")?.as_str() {
            "property" => Property::from_json(value).map(Self::Property),
            "auto" => Auto::from_json(value).map(Self::Auto),
            "house" => House::from_json(value).map(Self::House),
            other => Err(DomainError::invalid_value(format!(
                "Unknown asset kind: {}",
                other
            ))),
        }
    }

    /// Short name of the variant, as used in the `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Property(_) => "property",
            Self::Auto(_) => "auto",
            Self::House(_) => "house",
        }
    }
}

impl Asset for AnyAsset {
    fn property(&self) -> &Property {
        match self {
            Self::Property(p) => p,
            Self::Auto(a) => a.property(),
            Self::House(h) => h.property(),
        }
    }

    fn property_mut(&mut self) -> &mut Property {
        match self {
            Self::Property(p) => p,
            Self::Auto(a) => a.property_mut(),
            Self::House(h) => h.property_mut(),
        }
    }

    fn price_multiplier(&self) -> f64 {
        match self {
            Self::Property(p) => p.price_multiplier(),
            Self::Auto(a) => a.price_multiplier(),
            Self::House(h) => h.price_multiplier(),
        }
    }
}

impl fmt::Display for AnyAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(p) => fmt::Display::fmt(p, f),
            Self::Auto(a) => fmt::Display::fmt(a, f),
            Self::House(h) => fmt::Display::fmt(h, f),
        }
    }
}

impl From<Property> for AnyAsset {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Auto> for AnyAsset {
    fn from(auto: Auto) -> Self {
        Self::Auto(auto)
    }
}

impl From<House> for AnyAsset {
    fn from(house: House) -> Self {
        Self::House(house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_any_asset_dispatches_override() {
        let mut asset: AnyAsset = Auto::new("me", 1000.0, "audi").expect("valid").into();
        asset.increase_price(100.0).expect("positive amount");
        assert_eq!(asset.property().price().value(), 1150.0);
        assert_eq!(asset.kind(), "auto");
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let err = AnyAsset::from_json(&json!({"kind": "boat", "owner": "me", "price": 1.0}))
            .expect_err("unknown kind");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_from_json_missing_kind() {
        let err = AnyAsset::from_json(&json!({"owner": "me", "price": 1.0}))
            .expect_err("missing kind");
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_serialize_is_tagged_and_flat() {
        let asset: AnyAsset = House::new("me", 10.0, 2).expect("valid").into();
        let value = serde_json::to_value(&asset).expect("serialize");
        assert_eq!(
            value,
            json!({"kind": "house", "owner": "me", "price": 10.0, "number_of_rooms": 2})
        );
    }

    #[test]
    fn test_display_delegates() {
        let asset: AnyAsset = Property::new("me", 5.0).expect("valid").into();
        assert_eq!(asset.to_string(), "Owner: me. Price: 5");
    }
}
