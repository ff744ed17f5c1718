//! Command handlers

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::debug;

use carconf_app::config::Config;
use carconf_app::repository::{load_fleet, open_fleet};
use carconf_app::showroom::{demo_fleet, SHOWROOM_TITLES};
use carconf_domain::model::{Body, Engine, Vehicle, Wheel};
use carconf_domain::service::report::{body_section, engine_section, wheel_section};
use carconf_domain::service::{compare_power, generate_vehicle_report};
use carconf_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::{
    output_fleet_report, output_power_comparison, output_price, output_showroom_json,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // reset has to work even when the stored config no longer parses
    if is_config_reset(&cli.command) {
        logging::init(cli.verbose, &Config::default().log_level);
        Config::reset()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let config = Config::load()?;
    logging::init(cli.verbose, &config.log_level);

    let output_format = cli.format.unwrap_or(config.output_format);
    let fleet = cli.fleet.as_deref();
    debug!(format = %output_format, fleet = ?fleet, "starting command");

    match cli.command {
        Commands::Demo => cmd_demo(output_format),
        Commands::Report { brand, model } => {
            cmd_report(&config, fleet, output_format, brand.as_deref().zip(model.as_deref()))
        }
        Commands::Price {
            brand,
            model,
            year,
            power,
            fuel,
            style,
            doors,
            diameters,
            tire,
        } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let wheels = build_wheels(&diameters, &tire);
            let vehicle = Vehicle::new(
                brand,
                model,
                year,
                Engine::new(power, fuel),
                Body::new(style, doors),
                wheels,
            )?;
            output_price(output_format, &vehicle)
        }
        Commands::Compare => {
            let vehicles = load_fleet(&config, fleet)?;
            let comparison = compare_power(&vehicles)?;
            output_power_comparison(output_format, &comparison)
        }
        Commands::Config {
            show,
            set_output,
            set_fleet,
            clear_fleet,
            set_log_level,
            ..
        } => cmd_config(config, show, set_output, set_fleet, clear_fleet, set_log_level),
    }
}

fn is_config_reset(command: &Commands) -> bool {
    matches!(command, Commands::Config { reset: true, .. })
}

/// One diameter means a matching set; anything else is taken wheel by wheel
fn build_wheels(diameters: &[f64], tire: &str) -> Vec<Wheel> {
    match diameters {
        [diameter] => Wheel::matching_set(*diameter, tire),
        _ => diameters.iter().map(|d| Wheel::new(*d, tire)).collect(),
    }
}

fn cmd_report(
    config: &Config,
    fleet: Option<&Path>,
    output_format: OutputFormat,
    name: Option<(&str, &str)>,
) -> Result<()> {
    let repo = open_fleet(config, fleet)?;
    let vehicles = match name {
        Some((brand, model)) => {
            let vehicle = repo
                .find_by_name(brand, model)?
                .ok_or_else(|| Error::VehicleNotFound(format!("{} {}", brand, model)))?;
            vec![vehicle]
        }
        None => repo.find_all()?,
    };
    output_fleet_report(output_format, &vehicles)
}

fn cmd_demo(output_format: OutputFormat) -> Result<()> {
    let fleet = demo_fleet()?;
    let comparison = compare_power(&fleet)?;

    if output_format == OutputFormat::Json {
        return output_showroom_json(&fleet, &comparison);
    }

    println!("CAR COMPANY MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));

    for (i, (vehicle, title)) in fleet.iter().zip(SHOWROOM_TITLES).enumerate() {
        println!("\n{}. {}:", i + 1, title);
        print!("{}", generate_vehicle_report(vehicle));
        println!("{}", vehicle.start_engine());
        println!();
    }

    println!("\n{}", "=".repeat(50));
    println!("COMPONENT DEMONSTRATION:");
    println!("{}", "=".repeat(50));

    if let Some(vehicle) = fleet.first() {
        println!("\nEngine of {}:", vehicle.display_name());
        println!("{}", engine_section(vehicle.engine()));
    }
    if let Some(vehicle) = fleet.get(2) {
        println!("\nBody of {}:", vehicle.display_name());
        println!("{}", body_section(vehicle.body()));
    }
    if let Some(vehicle) = fleet.get(3) {
        println!("\nWheels of {}:", vehicle.display_name());
        println!("{}", wheel_section(vehicle.wheels()));
    }

    println!();
    output_power_comparison(output_format, &comparison)?;

    let leader = comparison.leader_entry();
    debug!(brand = %leader.brand, model = %leader.model, "showroom finished");
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_fleet: Option<PathBuf>,
    clear_fleet: bool,
    set_log_level: Option<String>,
) -> Result<()> {
    let mut modified = false;

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(path) = set_fleet {
        println!("Fleet file set to: {}", path.display());
        config.fleet_path = Some(path);
        modified = true;
    } else if clear_fleet {
        config.fleet_path = None;
        modified = true;
        println!("Fleet file cleared, using the demo showroom");
    }

    if let Some(level) = set_log_level {
        println!("Log level set to: {}", level);
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
