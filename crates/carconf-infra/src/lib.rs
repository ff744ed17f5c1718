//! Infrastructure layer - fleet file loaders and persistence

pub mod fleet_loader;
pub mod persistence;
