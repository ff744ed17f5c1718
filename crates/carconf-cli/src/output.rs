//! Output formatting module

use chrono::{DateTime, Utc};
use serde::Serialize;

use carconf_domain::model::Vehicle;
use carconf_domain::service::{
    format_price, generate_power_report, generate_vehicle_report, price_breakdown,
    PowerComparison, PriceBreakdown,
};
use carconf_types::{OutputFormat, Result};

/// A vehicle together with its price, as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct VehicleReport<'a> {
    pub vehicle: &'a Vehicle,
    pub price: PriceBreakdown,
}

impl<'a> VehicleReport<'a> {
    pub fn new(vehicle: &'a Vehicle) -> Self {
        Self {
            vehicle,
            price: price_breakdown(vehicle),
        }
    }
}

#[derive(Debug, Serialize)]
struct FleetReport<'a> {
    generated_at: DateTime<Utc>,
    vehicles: Vec<VehicleReport<'a>>,
}

#[derive(Debug, Serialize)]
struct ShowroomReport<'a> {
    generated_at: DateTime<Utc>,
    vehicles: Vec<VehicleReport<'a>>,
    power: &'a PowerComparison,
}

pub fn output_fleet_report(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let report = FleetReport {
            generated_at: Utc::now(),
            vehicles: vehicles.iter().map(VehicleReport::new).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for vehicle in vehicles {
            print!("{}", generate_vehicle_report(vehicle));
            println!();
        }
    }
    Ok(())
}

pub fn output_price(output_format: OutputFormat, vehicle: &Vehicle) -> Result<()> {
    let report = VehicleReport::new(vehicle);
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let price = &report.price;
        println!("\nPrice Estimate");
        println!("==============");
        println!("Vehicle:         {}", vehicle);
        println!("{}", vehicle.engine());
        println!("{}", vehicle.body());
        println!("{}", vehicle.front_wheel());
        println!("-------------------------");
        println!("Base price:      {}", format_price(price.base));
        println!("Engine:          {}", format_price(price.engine));
        println!("Body:            {}", format_price(price.body));
        println!("Wheels:          {}", format_price(price.wheels));
        println!("-------------------------");
        println!("Total:           {}", format_price(price.total));
    }
    Ok(())
}

pub fn output_power_comparison(
    output_format: OutputFormat,
    comparison: &PowerComparison,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(comparison)?);
    } else {
        print!("{}", generate_power_report(comparison));
    }
    Ok(())
}

pub fn output_showroom_json(vehicles: &[Vehicle], comparison: &PowerComparison) -> Result<()> {
    let report = ShowroomReport {
        generated_at: Utc::now(),
        vehicles: vehicles.iter().map(VehicleReport::new).collect(),
        power: comparison,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
