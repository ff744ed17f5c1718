//! Price estimation for assembled vehicles
//!
//! # Formula
//! price = 20000 + power x 100 + body surcharge + first wheel diameter x 50 x 4
//!
//! Only the first wheel's diameter is priced. The other three are ignored,
//! so a mixed set costs the same as four copies of the first wheel.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::{Vehicle, WHEEL_COUNT};

pub const BASE_PRICE: f64 = 20_000.0;
pub const PRICE_PER_HORSEPOWER: f64 = 100.0;
pub const PRICE_PER_WHEEL_INCH: f64 = 50.0;
/// Surcharge for styles missing from [`BODY_SURCHARGES`]
pub const DEFAULT_BODY_SURCHARGE: f64 = 5_000.0;

/// Body style surcharges, keyed by lowercase style label
pub static BODY_SURCHARGES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("sedan", 5_000.0);
    m.insert("hatchback", 4_000.0);
    m.insert("suv", 8_000.0);
    m.insert("coupe", 6_000.0);
    m.insert("wagon", 4_500.0);

    m.insert("седан", 5_000.0);
    m.insert("хэтчбек", 4_000.0);
    m.insert("внедорожник", 8_000.0);
    m.insert("купе", 6_000.0);
    m.insert("универсал", 4_500.0);

    m
});

/// Price components of a single vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: f64,
    pub engine: f64,
    pub body: f64,
    pub wheels: f64,
    pub total: f64,
}

/// Surcharge for a body style, ignoring case and surrounding whitespace
pub fn body_surcharge(style: &str) -> f64 {
    let normalized = style.trim().to_lowercase();
    BODY_SURCHARGES
        .get(normalized.as_str())
        .copied()
        .unwrap_or(DEFAULT_BODY_SURCHARGE)
}

pub fn price_breakdown(vehicle: &Vehicle) -> PriceBreakdown {
    let engine = vehicle.engine().power * PRICE_PER_HORSEPOWER;
    let body = body_surcharge(&vehicle.body().style);
    let wheel_price = vehicle.front_wheel().diameter * PRICE_PER_WHEEL_INCH;
    let wheels = wheel_price * WHEEL_COUNT as f64;

    PriceBreakdown {
        base: BASE_PRICE,
        engine,
        body,
        wheels,
        total: BASE_PRICE + engine + body + wheels,
    }
}

pub fn estimate_price(vehicle: &Vehicle) -> f64 {
    price_breakdown(vehicle).total
}
