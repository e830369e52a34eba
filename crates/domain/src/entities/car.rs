//! Car entity - a vehicle with a speed and a number of seats

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::common::{validate, FieldReader};
use crate::error::DomainError;
use crate::events::StopOutcome;
use crate::value_objects::{Brand, Count};

/// A car on the road
///
/// This is a plain vehicle, unrelated to the [`Auto`](crate::aggregates::Auto)
/// property variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    brand: Brand,
    /// km/h
    current_speed: Count,
    count_of_seats: Count,
}

impl Car {
    /// # Errors
    ///
    /// - `DomainError::Value` if the speed or the seat count is negative
    pub fn new(
        brand: impl Into<Brand>,
        current_speed: i64,
        count_of_seats: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            brand: brand.into(),
            current_speed: Count::new("Current speed", current_speed)?,
            count_of_seats: Count::new("Count of seats", count_of_seats)?,
        })
    }

    /// Build from a JSON object with `brand`, `current_speed`, and `count_of_seats`.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("Car", value)?;
        Self::new(
            fields.string("brand")?,
            fields.integer("current_speed")?,
            fields.integer("count_of_seats")?,
        )
    }

    #[inline]
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    #[inline]
    pub fn current_speed(&self) -> u32 {
        self.current_speed.value()
    }

    #[inline]
    pub fn count_of_seats(&self) -> u32 {
        self.count_of_seats.value()
    }

    /// Bring the car to a standstill.
    pub fn stop(&mut self) -> StopOutcome {
        if self.current_speed.is_zero() {
            return StopOutcome::AlreadyStopped;
        }
        let from_speed = std::mem::replace(&mut self.current_speed, Count::zero());
        StopOutcome::Stopped { from_speed }
    }

    /// Whether `count_of_people` fit in the car's seats.
    ///
    /// # Errors
    ///
    /// - `DomainError::Value` if `count_of_people` is negative
    ///
    /// # Example
    ///
    /// ```
    /// use labkit_domain::entities::Car;
    ///
    /// let car = Car::new("Audi", 120, 5).unwrap();
    /// assert_eq!(car.can_accommodate(5), Ok(true));
    /// assert_eq!(car.can_accommodate(6), Ok(false));
    /// ```
    pub fn can_accommodate(&self, count_of_people: i64) -> Result<bool, DomainError> {
        let people = validate::non_negative_int("Count of people", count_of_people);
        match people {
            Ok(people) => Ok(people <= self.count_of_seats.value()),
            // Beyond u32 range: more people than any car has seats
            Err(_) if count_of_people > 0 => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} km/h, {} seats",
            self.brand, self.current_speed, self.count_of_seats
        )
    }
}
