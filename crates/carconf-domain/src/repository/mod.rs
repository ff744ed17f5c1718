//! Repository trait definitions for fleet data

use carconf_types::Error;

use crate::model::Vehicle;

/// Source of vehicles
pub trait FleetRepository {
    /// All vehicles, in source order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// First vehicle matching brand and model, ignoring case
    fn find_by_name(&self, brand: &str, model: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|v| v.matches(brand, model)))
    }
}
