//! Wheel type definitions

use serde::{Deserialize, Serialize};

use super::vehicle::WHEEL_COUNT;

/// Wheel specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    /// Rim diameter in inches
    pub diameter: f64,
    /// Tire type label (summer, winter, all-season, ...)
    pub tire_type: String,
}

impl Wheel {
    pub fn new(diameter: f64, tire_type: impl Into<String>) -> Self {
        Self {
            diameter,
            tire_type: tire_type.into(),
        }
    }

    /// A full set of identical wheels, enough for one vehicle
    pub fn matching_set(diameter: f64, tire_type: impl Into<String>) -> Vec<Wheel> {
        vec![Self::new(diameter, tire_type); WHEEL_COUNT]
    }

    pub fn describe(&self) -> String {
        format!("Wheel: {}\", tire: {}", self.diameter, self.tire_type)
    }
}

impl std::fmt::Display for Wheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let wheel = Wheel::new(16.0, "summer");
        assert_eq!(wheel.describe(), "Wheel: 16\", tire: summer");
    }

    #[test]
    fn test_matching_set() {
        let wheels = Wheel::matching_set(18.0, "all-season");
        assert_eq!(wheels.len(), WHEEL_COUNT);
        assert!(wheels.iter().all(|w| w == &wheels[0]));
    }
}
