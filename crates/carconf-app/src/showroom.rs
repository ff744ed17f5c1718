//! Demonstration showroom: five ready-made cars

use carconf_domain::model::{Body, Engine, Vehicle, Wheel};
use carconf_types::Result;

/// Economy sedan, SUV, sports coupe, family hatchback and an electric car
pub fn demo_fleet() -> Result<Vec<Vehicle>> {
    Ok(vec![
        Vehicle::new(
            "Toyota",
            "Corolla",
            2023,
            Engine::new(120.0, "gasoline"),
            Body::new("sedan", 4),
            Wheel::matching_set(16.0, "summer"),
        )?,
        Vehicle::new(
            "Toyota",
            "Land Cruiser",
            2023,
            Engine::new(250.0, "diesel"),
            Body::new("suv", 5),
            Wheel::matching_set(18.0, "all-season"),
        )?,
        Vehicle::new(
            "Porsche",
            "911",
            2023,
            Engine::new(350.0, "premium gasoline"),
            Body::new("coupe", 2),
            Wheel::matching_set(19.0, "sport"),
        )?,
        Vehicle::new(
            "Volkswagen",
            "Golf",
            2023,
            Engine::new(110.0, "lpg/gasoline"),
            Body::new("hatchback", 5),
            Wheel::matching_set(15.0, "winter"),
        )?,
        Vehicle::new(
            "Tesla",
            "Model 3",
            2023,
            Engine::new(300.0, "electricity"),
            Body::new("sedan", 4),
            Wheel::matching_set(17.0, "eco"),
        )?,
    ])
}

/// Headings used when the showroom is presented
pub const SHOWROOM_TITLES: [&str; 5] = [
    "Economy sedan",
    "SUV",
    "Sports coupe",
    "Family hatchback",
    "Electric car",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_fleet_prices() {
        let fleet = demo_fleet().unwrap();
        let prices: Vec<f64> = fleet.iter().map(Vehicle::estimate_price).collect();
        // 20000 + power x 100 + surcharge + diameter x 200
        let expected = [40_200.0, 56_600.0, 64_800.0, 38_000.0, 58_400.0];
        for (price, expected) in prices.iter().zip(expected) {
            assert!((price - expected).abs() < 0.01, "{} != {}", price, expected);
        }
    }

    #[test]
    fn test_titles_match_fleet() {
        assert_eq!(demo_fleet().unwrap().len(), SHOWROOM_TITLES.len());
    }
}
