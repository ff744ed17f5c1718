//! Repository adapters for fleet sources

use std::path::Path;

use tracing::debug;

use carconf_domain::model::Vehicle;
use carconf_domain::repository::FleetRepository;
use carconf_infra::persistence::FileFleetRepository;
use carconf_types::Result;

use crate::config::Config;
use crate::showroom::demo_fleet;

/// The built-in demonstration cars
pub struct ShowroomRepository;

impl FleetRepository for ShowroomRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>> {
        demo_fleet()
    }
}

/// Pick the fleet source: explicit path, then the configured file, then the showroom
pub fn open_fleet(
    config: &Config,
    fleet_override: Option<&Path>,
) -> Result<Box<dyn FleetRepository>> {
    let path = fleet_override
        .map(Path::to_path_buf)
        .or_else(|| config.fleet_path.clone());

    match path {
        Some(path) => {
            debug!(path = %path.display(), "using fleet file");
            Ok(Box::new(FileFleetRepository::open(&path)?))
        }
        None => {
            debug!("no fleet file configured, using demo showroom");
            Ok(Box::new(ShowroomRepository))
        }
    }
}

/// All vehicles of the selected fleet
pub fn load_fleet(config: &Config, fleet_override: Option<&Path>) -> Result<Vec<Vehicle>> {
    open_fleet(config, fleet_override)?.find_all()
}
