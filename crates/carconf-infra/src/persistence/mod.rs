//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_fleet_repo;

pub use file_fleet_repo::{FileFleetRepository, FleetFormat};
