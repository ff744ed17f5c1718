//! Domain models, services, and repository traits for car configuration

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::FleetRepository;
