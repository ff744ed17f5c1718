//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use carconf_types::OutputFormat;

#[derive(Parser)]
#[command(name = "carconf")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Car configuration and price estimation")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet file (.json, .toml, .csv). Falls back to the configured file, then the demo showroom.
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the demo showroom: reports, engine starts, power comparison
    Demo,

    /// Full report for every vehicle of the fleet, or for one vehicle
    Report {
        /// Brand of the vehicle to report on
        #[arg(long, requires = "model")]
        brand: Option<String>,

        /// Model of the vehicle to report on
        #[arg(long, requires = "brand")]
        model: Option<String>,
    },

    /// Assemble a single car and estimate its price
    Price {
        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        /// Model year. Defaults to the current year.
        #[arg(long)]
        year: Option<i32>,

        /// Engine power in horsepower
        #[arg(long)]
        power: f64,

        /// Fuel type
        #[arg(long, default_value = "gasoline")]
        fuel: String,

        /// Body style (sedan, hatchback, suv, coupe, wagon, ...)
        #[arg(long)]
        style: String,

        /// Number of doors
        #[arg(long, default_value = "4")]
        doors: u32,

        /// Wheel diameter in inches. One value fits all four wheels, otherwise give exactly four.
        #[arg(long = "diameter", required = true, num_args = 1..)]
        diameters: Vec<f64>,

        /// Tire type
        #[arg(long, default_value = "all-season")]
        tire: String,
    },

    /// Compare fleet vehicles by engine power
    Compare,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fleet file
        #[arg(long)]
        set_fleet: Option<PathBuf>,

        /// Forget the default fleet file (use the demo showroom)
        #[arg(long)]
        clear_fleet: bool,

        /// Set log level (error, warn, info, debug, trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
