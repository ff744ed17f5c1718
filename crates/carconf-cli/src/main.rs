//! Carconf - car configuration and price estimation
//!
//! A CLI tool that assembles cars from engine, body and wheels, estimates
//! their price and compares fleets by engine power.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
