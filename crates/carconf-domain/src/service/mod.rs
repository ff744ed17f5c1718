//! Domain services

pub mod power_ranking;
pub mod price_estimator;
pub mod report;

pub use power_ranking::{compare_power, most_powerful, PowerComparison, PowerEntry};
pub use price_estimator::{body_surcharge, estimate_price, price_breakdown, PriceBreakdown};
pub use report::{format_price, generate_power_report, generate_vehicle_report};
