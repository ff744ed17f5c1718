//! Engine power comparison across a fleet

use serde::{Deserialize, Serialize};
use tracing::debug;

use carconf_types::{Error, Result};

use crate::model::Vehicle;

/// One line of a power comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerEntry {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub power: f64,
}

/// Power of every vehicle, in input order, plus the winner
///
/// Only built by [`compare_power`], so `leader` always points into a non-empty `entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerComparison {
    entries: Vec<PowerEntry>,
    leader: usize,
}

impl PowerComparison {
    pub fn entries(&self) -> &[PowerEntry] {
        &self.entries
    }

    /// Index into `entries()` of the most powerful vehicle
    pub fn leader(&self) -> usize {
        self.leader
    }

    pub fn leader_entry(&self) -> &PowerEntry {
        &self.entries[self.leader]
    }
}

/// Index of the vehicle with the highest engine power.
///
/// Ties go to the vehicle that comes first.
fn most_powerful_index(vehicles: &[Vehicle]) -> Result<usize> {
    let first = vehicles.first().ok_or(Error::EmptyInput)?;
    let mut best = 0;
    let mut best_power = first.engine().power;
    for (i, vehicle) in vehicles.iter().enumerate().skip(1) {
        if vehicle.engine().power > best_power {
            best = i;
            best_power = vehicle.engine().power;
        }
    }
    Ok(best)
}

pub fn most_powerful(vehicles: &[Vehicle]) -> Result<&Vehicle> {
    let index = most_powerful_index(vehicles)?;
    let vehicle = &vehicles[index];
    debug!(
        vehicle = %vehicle,
        power = vehicle.engine().power,
        candidates = vehicles.len(),
        "most powerful vehicle selected"
    );
    Ok(vehicle)
}

pub fn compare_power(vehicles: &[Vehicle]) -> Result<PowerComparison> {
    let leader = most_powerful_index(vehicles)?;
    let entries = vehicles
        .iter()
        .map(|v| PowerEntry {
            brand: v.brand().to_string(),
            model: v.model().to_string(),
            year: v.year(),
            power: v.engine().power,
        })
        .collect();
    Ok(PowerComparison { entries, leader })
}
