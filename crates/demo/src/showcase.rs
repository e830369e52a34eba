//! The walkthrough itself: build each entity, mutate it, record every step.

use serde::Serialize;
use serde_json::Value;

use labkit_domain::{Asset, Auto, Car, DomainError, House, Photo, Song};

use crate::config::DemoConfig;

/// One recorded step of the walkthrough
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub label: String,
    /// `Display` form of the entity after the step
    pub text: String,
    /// Serialized entity state after the step
    pub state: Value,
}

#[derive(Debug, Default)]
pub struct Walkthrough {
    steps: Vec<Step>,
}

impl Walkthrough {
    fn record<T>(&mut self, label: impl Into<String>, entity: &T)
    where
        T: Serialize + std::fmt::Display,
    {
        let label = label.into();
        tracing::debug!(step = %label, entity = %entity, "recorded step");
        self.steps.push(Step {
            label,
            text: entity.to_string(),
            state: serde_json::to_value(entity).unwrap_or(Value::Null),
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Run every part of the walkthrough.
pub fn run(config: &DemoConfig) -> Result<Walkthrough, DomainError> {
    let mut walk = Walkthrough::default();
    properties(config, &mut walk)?;
    entities(&mut walk)?;
    Ok(walk)
}

fn properties(config: &DemoConfig, walk: &mut Walkthrough) -> Result<(), DomainError> {
    let mut auto = Auto::new("me", 3_524_345.0, config.auto_brand.as_str())?;
    let mut house = House::new("me", 231_443.13, 7)?;

    walk.record("auto", &auto);
    let change = auto.increase_price(5.0)?;
    tracing::info!(
        brand = %auto.brand(),
        delta = change.delta(),
        "auto price increased"
    );
    walk.record("auto after increase_price(5)", &auto);

    walk.record("house", &house);
    let change = house.increase_price(4536.45)?;
    tracing::info!(
        rooms = house.number_of_rooms(),
        delta = change.delta(),
        "house price increased"
    );
    walk.record("house after increase_price(4536.45)", &house);

    house.property_mut().reset_price();
    walk.record("house after reset_price()", &house);
    Ok(())
}

fn entities(walk: &mut Walkthrough) -> Result<(), DomainError> {
    let mut song = Song::new("Lyudi", "Daite tank (!)", 2.56)?;
    walk.record("song", &song);
    song.increase_length(1.2)?;
    walk.record("song after increase_length(1.2)", &song);
    song.decrease_length(1.81)?;
    walk.record("song after decrease_length(1.81)", &song);

    let mut photo = Photo::new(true, 7.0, 9.5)?;
    walk.record("photo", &photo);
    photo.crop_photo(2.0, 1.5)?;
    photo.turn_photo();
    photo.make_colorful();
    walk.record("photo after crop, turn, make_colorful", &photo);

    let mut car = Car::new("Audi", 120, 5)?;
    walk.record("car", &car);
    let fits = car.can_accommodate(7)?;
    tracing::info!(people = 7, fits, "checked car capacity");
    car.stop();
    walk.record("car after stop()", &car);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_records_every_step() {
        let walk = run(&DemoConfig::default()).expect("walkthrough succeeds");
        let labels: Vec<&str> = walk.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "auto");
        assert_eq!(labels[11], "car after stop()");
    }

    #[test]
    fn test_audi_multiplier_applies() {
        let walk = run(&DemoConfig::default()).expect("walkthrough succeeds");
        let after = &walk.steps()[1];
        assert_eq!(after.state["price"], serde_json::json!(3_524_352.5));
        assert_eq!(after.text, "Owner: me. Price: 3524352.5 Brand: audi");
    }

    #[test]
    fn test_other_brand_has_no_multiplier() {
        let config = DemoConfig {
            auto_brand: "lada".to_string(),
            ..DemoConfig::default()
        };
        let walk = run(&config).expect("walkthrough succeeds");
        assert_eq!(walk.steps()[1].state["price"], serde_json::json!(3_524_350.0));
    }

    #[test]
    fn test_house_reset() {
        let walk = run(&DemoConfig::default()).expect("walkthrough succeeds");
        let reset = &walk.steps()[4];
        assert_eq!(reset.label, "house after reset_price()");
        assert_eq!(reset.state["price"], serde_json::json!(0.0));
        assert_eq!(reset.state["number_of_rooms"], serde_json::json!(7));
    }

    #[test]
    fn test_car_stopped() {
        let walk = run(&DemoConfig::default()).expect("walkthrough succeeds");
        let last = walk.into_steps().pop().expect("at least one step");
        assert_eq!(last.state["current_speed"], serde_json::json!(0));
    }
}
