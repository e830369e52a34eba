//! House aggregate - a property whose value scales with its rooms

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::{Asset, Property};
use crate::common::FieldReader;
use crate::error::DomainError;
use crate::value_objects::{Count, Owner};

/// A house owned as property
///
/// Each price increase is multiplied by the number of rooms. A house with
/// no rooms accepts any valid increase but its price does not move.
///
/// # Example
///
/// ```
/// use labkit_domain::aggregates::{Asset, House};
///
/// let mut house = House::new("me", 1000.0, 3).unwrap();
/// house.increase_price(100.0).unwrap();
/// assert_eq!(house.property().price().value(), 1300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    #[serde(flatten)]
    property: Property,
    number_of_rooms: Count,
}

impl House {
    pub fn new(
        owner: impl Into<Owner>,
        price: f64,
        number_of_rooms: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            property: Property::new(owner, price)?,
            number_of_rooms: Count::from(number_of_rooms),
        })
    }

    /// Build from a JSON object with `owner`, `price`, and `number_of_rooms`.
    ///
    /// A negative room count is a `Value` error.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("House", value)?;
        Ok(Self {
            property: Property::from_fields(&fields)?,
            number_of_rooms: Count::new("Number of rooms", fields.integer("number_of_rooms")?)?,
        })
    }

    #[inline]
    pub fn number_of_rooms(&self) -> u32 {
        self.number_of_rooms.value()
    }

    pub fn set_number_of_rooms(&mut self, number_of_rooms: u32) {
        self.number_of_rooms = Count::from(number_of_rooms);
    }
}

impl Asset for House {
    fn property(&self) -> &Property {
        &self.property
    }

    fn property_mut(&mut self) -> &mut Property {
        &mut self.property
    }

    fn price_multiplier(&self) -> f64 {
        f64::from(self.number_of_rooms.value())
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Rooms: {}", self.property, self.number_of_rooms)
    }
}
