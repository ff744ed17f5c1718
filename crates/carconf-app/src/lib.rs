//! Application service layer - config, showroom, fleet wiring

pub mod config;
pub mod repository;
pub mod showroom;
