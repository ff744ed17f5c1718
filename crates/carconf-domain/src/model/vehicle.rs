//! Vehicle aggregate
//!
//! A vehicle owns its engine, body and exactly [`WHEEL_COUNT`] wheels. The
//! wheel count is checked once, at construction, and the array type keeps it
//! true afterwards.

use serde::{Deserialize, Serialize};

use carconf_types::{Error, Result};

use super::{Body, Engine, Wheel};
use crate::service::price_estimator;

/// Number of wheels every vehicle must have
pub const WHEEL_COUNT: usize = 4;

/// A complete car built from its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VehicleDraft")]
pub struct Vehicle {
    brand: String,
    model: String,
    year: i32,
    engine: Engine,
    body: Body,
    wheels: [Wheel; WHEEL_COUNT],
}

/// Unvalidated vehicle data, as read from a fleet file
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub engine: Engine,
    pub body: Body,
    pub wheels: Vec<Wheel>,
}

impl Vehicle {
    /// Assemble a vehicle, taking ownership of its components.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless exactly four wheels
    /// are given. No other field is validated.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        engine: Engine,
        body: Body,
        wheels: Vec<Wheel>,
    ) -> Result<Self> {
        let received = wheels.len();
        let wheels: [Wheel; WHEEL_COUNT] = wheels.try_into().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "a vehicle must have exactly {} wheels, got {}",
                WHEEL_COUNT, received
            ))
        })?;

        Ok(Self {
            brand: brand.into(),
            model: model.into(),
            year,
            engine,
            body,
            wheels,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// First wheel of the set (the one the price estimate looks at)
    pub fn front_wheel(&self) -> &Wheel {
        &self.wheels[0]
    }

    /// "Brand Model", without the year
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Case-insensitive brand and model match
    pub fn matches(&self, brand: &str, model: &str) -> bool {
        self.brand.to_lowercase() == brand.trim().to_lowercase()
            && self.model.to_lowercase() == model.trim().to_lowercase()
    }

    pub fn estimate_price(&self) -> f64 {
        price_estimator::estimate_price(self)
    }

    /// Messages printed when the engine is started
    pub fn start_engine(&self) -> String {
        format!(
            "Starting the {} hp engine on {}...\nEngine started! Vroom-vroom!",
            self.engine.power, self.engine.fuel_type
        )
    }
}

impl TryFrom<VehicleDraft> for Vehicle {
    type Error = Error;

    fn try_from(draft: VehicleDraft) -> Result<Self> {
        Vehicle::new(
            draft.brand,
            draft.model,
            draft.year,
            draft.engine,
            draft.body,
            draft.wheels,
        )
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)
    }
}
