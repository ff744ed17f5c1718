//! File-based implementation of FleetRepository

use std::path::Path;

use tracing::debug;

use carconf_domain::model::Vehicle;
use carconf_domain::repository::FleetRepository;
use carconf_types::{Error, Result};

use crate::fleet_loader::{load_fleet_from_csv, load_fleet_from_json, load_fleet_from_toml};

/// Fleet file format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetFormat {
    Json,
    Toml,
    Csv,
}

impl FleetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(FleetFormat::Json),
            "toml" => Ok(FleetFormat::Toml),
            "csv" => Ok(FleetFormat::Csv),
            _ => Err(Error::FleetLoad(format!(
                "unsupported fleet file '{}' (expected .json, .toml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Fleet read once from a JSON, TOML or CSV file
pub struct FileFleetRepository {
    vehicles: Vec<Vehicle>,
}

impl FileFleetRepository {
    pub fn open(path: &Path) -> Result<Self> {
        let vehicles = match FleetFormat::from_path(path)? {
            FleetFormat::Json => load_fleet_from_json(path)?,
            FleetFormat::Toml => load_fleet_from_toml(path)?,
            FleetFormat::Csv => load_fleet_from_csv(path)?,
        };
        debug!(path = %path.display(), count = vehicles.len(), "opened fleet repository");
        Ok(Self { vehicles })
    }
}

impl FleetRepository for FileFleetRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "brand,model,year,power,fuel_type,style,doors,diameter,tire_type\n\
Toyota,Corolla,2023,120,gasoline,sedan,4,16,summer\n\
Toyota,Land Cruiser,2023,250,diesel,suv,5,18,all-season\n";

    fn csv_fleet() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FleetFormat::from_path(Path::new("a.json")).unwrap(), FleetFormat::Json);
        assert_eq!(FleetFormat::from_path(Path::new("a.TOML")).unwrap(), FleetFormat::Toml);
        assert_eq!(FleetFormat::from_path(Path::new("dir/a.csv")).unwrap(), FleetFormat::Csv);
        assert!(matches!(
            FleetFormat::from_path(Path::new("fleet.xlsx")),
            Err(Error::FleetLoad(_))
        ));
        assert!(FleetFormat::from_path(Path::new("fleet")).is_err());
    }

    #[test]
    fn test_find_all_and_by_name() {
        let file = csv_fleet();
        let repo = FileFleetRepository::open(file.path()).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);

        let found = repo.find_by_name("TOYOTA", "land cruiser").unwrap();
        assert_eq!(found.unwrap().engine().power, 250.0);
        assert!(repo.find_by_name("Toyota", "Supra").unwrap().is_none());
    }
}
