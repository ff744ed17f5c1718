//! Engine type definitions

use serde::{Deserialize, Serialize};

/// Engine specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Maximum power in horsepower
    pub power: f64,
    /// Fuel type label (gasoline, diesel, electricity, ...)
    pub fuel_type: String,
}

impl Engine {
    pub fn new(power: f64, fuel_type: impl Into<String>) -> Self {
        Self {
            power,
            fuel_type: fuel_type.into(),
        }
    }

    /// Single-line human readable description
    pub fn describe(&self) -> String {
        format!("Engine: {} hp, fuel: {}", self.power, self.fuel_type)
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
