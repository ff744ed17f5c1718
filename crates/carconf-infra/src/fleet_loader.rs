//! Fleet file loaders
//!
//! Three formats are understood:
//! - JSON: an array of vehicles
//! - TOML: `[[vehicles]]` tables
//! - CSV: one vehicle per row, with four identical wheels

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use carconf_domain::model::{Body, Engine, Vehicle, VehicleDraft, Wheel};
use carconf_types::{Error, Result};

#[derive(Debug, Deserialize)]
struct FleetDocument {
    #[serde(default)]
    vehicles: Vec<VehicleDraft>,
}

/// One CSV row
///
/// Expected header:
/// brand,model,year,power,fuel_type,style,doors,diameter,tire_type
#[derive(Debug, Deserialize)]
struct FleetCsvRow {
    brand: String,
    model: String,
    year: i32,
    power: f64,
    fuel_type: String,
    style: String,
    doors: u32,
    diameter: f64,
    tire_type: String,
}

impl FleetCsvRow {
    fn into_vehicle(self) -> Result<Vehicle> {
        Vehicle::new(
            self.brand,
            self.model,
            self.year,
            Engine::new(self.power, self.fuel_type),
            Body::new(self.style, self.doors),
            Wheel::matching_set(self.diameter, self.tire_type),
        )
    }
}

fn read_fleet_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Wheel counts are checked here, so every format reports them the same way
fn assemble(drafts: Vec<VehicleDraft>) -> Result<Vec<Vehicle>> {
    drafts.into_iter().map(Vehicle::try_from).collect()
}

pub fn load_fleet_from_json(path: &Path) -> Result<Vec<Vehicle>> {
    let content = read_fleet_file(path)?;
    let drafts: Vec<VehicleDraft> = serde_json::from_str(&content)?;
    let vehicles = assemble(drafts)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded JSON fleet");
    Ok(vehicles)
}

pub fn load_fleet_from_toml(path: &Path) -> Result<Vec<Vehicle>> {
    let content = read_fleet_file(path)?;
    let document: FleetDocument = toml::from_str(&content)?;
    let vehicles = assemble(document.vehicles)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded TOML fleet");
    Ok(vehicles)
}

pub fn load_fleet_from_csv(path: &Path) -> Result<Vec<Vehicle>> {
    let content = read_fleet_file(path)?;
    let vehicles = parse_fleet_csv(&content)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded CSV fleet");
    Ok(vehicles)
}

fn parse_fleet_csv(content: &str) -> Result<Vec<Vehicle>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut vehicles = Vec::new();
    for (row_idx, record) in reader.deserialize::<FleetCsvRow>().enumerate() {
        // header is row 1
        let row_num = row_idx + 2;
        let row = record.map_err(|e| Error::FleetLoad(format!("row {}: {}", row_num, e)))?;
        vehicles.push(row.into_vehicle()?);
    }
    Ok(vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV_HEADER: &str = "brand,model,year,power,fuel_type,style,doors,diameter,tire_type";

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_csv() {
        let content = format!(
            "{}\nToyota, Corolla, 2023, 120, gasoline, sedan, 4, 16, summer\n\
             Porsche,911,2023,350,premium gasoline,coupe,2,19,sport\n",
            CSV_HEADER
        );
        let vehicles = parse_fleet_csv(&content).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].model(), "Corolla");
        assert_eq!(vehicles[0].wheels().len(), 4);
        assert_eq!(vehicles[1].engine().fuel_type, "premium gasoline");
        assert!((vehicles[0].estimate_price() - 40_200.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_csv_bad_row() {
        let content = format!(
            "{}\nToyota,Corolla,2023,120,gasoline,sedan,4,16,summer\n\
             Tesla,Model 3,2023,lots,electricity,sedan,4,17,eco\n",
            CSV_HEADER
        );
        let err = parse_fleet_csv(&content).unwrap_err();
        assert!(matches!(err, Error::FleetLoad(ref msg) if msg.starts_with("row 3")));
    }

    #[test]
    fn test_parse_csv_header_only() {
        assert!(parse_fleet_csv(CSV_HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"[{
                "brand": "Volkswagen",
                "model": "Golf",
                "year": 2023,
                "engine": {"power": 110, "fuel_type": "lpg/gasoline"},
                "body": {"style": "hatchback", "doors": 5},
                "wheels": [
                    {"diameter": 15, "tire_type": "winter"},
                    {"diameter": 15, "tire_type": "winter"},
                    {"diameter": 15, "tire_type": "winter"},
                    {"diameter": 15, "tire_type": "winter"}
                ]
            }]"#,
        );
        let vehicles = load_fleet_from_json(file.path()).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].body().door_count, 5);
    }

    #[test]
    fn test_load_json_wrong_wheel_count() {
        let file = write_temp(
            ".json",
            r#"[{
                "brand": "Reliant",
                "model": "Robin",
                "year": 1973,
                "engine": {"power": 40, "fuel_type": "gasoline"},
                "body": {"style": "hatchback", "doors": 3},
                "wheels": [
                    {"diameter": 10, "tire_type": "summer"},
                    {"diameter": 10, "tire_type": "summer"},
                    {"diameter": 10, "tire_type": "summer"}
                ]
            }]"#,
        );
        assert!(matches!(
            load_fleet_from_json(file.path()),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(
            ".toml",
            r#"
[[vehicles]]
brand = "Tesla"
model = "Model 3"
year = 2023
engine = { power = 300, fuel_type = "electricity" }
body = { style = "sedan", door_count = 4 }
wheels = [
    { diameter = 17, tire_type = "eco" },
    { diameter = 17, tire_type = "eco" },
    { diameter = 17, tire_type = "eco" },
    { diameter = 17, tire_type = "eco" },
]
"#,
        );
        let vehicles = load_fleet_from_toml(file.path()).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].to_string(), "Tesla Model 3 (2023)");
    }

    #[test]
    fn test_load_toml_wrong_wheel_count() {
        let file = write_temp(
            ".toml",
            r#"
[[vehicles]]
brand = "Trike"
model = "One"
year = 2022
engine = { power = 60, fuel_type = "gasoline" }
body = { style = "roadster", door_count = 0 }
wheels = [
    { diameter = 14, tire_type = "summer" },
    { diameter = 14, tire_type = "summer" },
    { diameter = 14, tire_type = "summer" },
]
"#,
        );
        let err = load_fleet_from_toml(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(ref msg) if msg.contains("got 3")));
    }

    #[test]
    fn test_assemble_rejects_five_wheels() {
        let draft = VehicleDraft {
            brand: "Test".to_string(),
            model: "Car".to_string(),
            year: 2023,
            engine: Engine::new(100.0, "gasoline"),
            body: Body::new("sedan", 4),
            wheels: vec![Wheel::new(16.0, "summer"); 5],
        };
        assert!(matches!(assemble(vec![draft]), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(load_fleet_from_json(&path), Err(Error::FileNotFound(_))));
    }
}
