//! Text reports for vehicles and power comparisons

use crate::model::{Body, Engine, Vehicle, Wheel};
use crate::service::power_ranking::PowerComparison;
use crate::service::price_estimator::estimate_price;

pub fn engine_section(engine: &Engine) -> String {
    format!("=== Engine information ===\n{}\n", engine.describe())
}

pub fn body_section(body: &Body) -> String {
    format!("=== Body information ===\n{}\n", body.describe())
}

/// Wheels are numbered from 1
pub fn wheel_section(wheels: &[Wheel]) -> String {
    let mut section = String::from("=== Wheel information ===\n");
    for (i, wheel) in wheels.iter().enumerate() {
        section.push_str(&format!("Wheel {}: {}\n", i + 1, wheel.describe()));
    }
    section
}

/// Full report: header, every component section and the estimated price
pub fn generate_vehicle_report(vehicle: &Vehicle) -> String {
    let mut report = String::new();
    report.push_str(&"=".repeat(50));
    report.push('\n');
    report.push_str(&format!(
        "CAR: {} {} ({})\n",
        vehicle.brand(),
        vehicle.model(),
        vehicle.year()
    ));
    report.push_str(&"=".repeat(50));
    report.push_str("\n\n");

    report.push_str(&engine_section(vehicle.engine()));
    report.push('\n');
    report.push_str(&body_section(vehicle.body()));
    report.push('\n');
    report.push_str(&wheel_section(vehicle.wheels()));
    report.push('\n');

    report.push_str(&format!(
        "Estimated price: {}\n",
        format_price(estimate_price(vehicle))
    ));
    report.push_str(&"-".repeat(50));
    report.push('\n');
    report
}

pub fn generate_power_report(comparison: &PowerComparison) -> String {
    let mut report = String::new();
    report.push_str(&"=".repeat(50));
    report.push_str("\nPOWER COMPARISON\n");
    report.push_str(&"=".repeat(50));
    report.push('\n');

    for entry in comparison.entries() {
        report.push_str(&format!("{} {}: {} hp\n", entry.brand, entry.model, entry.power));
    }

    let leader = comparison.leader_entry();
    report.push_str(&format!(
        "\nMost powerful: {} {} ({}) ({} hp)\n",
        leader.brand, leader.model, leader.year, leader.power
    ));
    report
}

/// `$1,234.50` style amount with thousands separators
pub fn format_price(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // amounts that round to zero print unsigned
    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
