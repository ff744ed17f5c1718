//! Domain model types

pub mod body;
pub mod engine;
pub mod vehicle;
pub mod wheel;

pub use body::Body;
pub use engine::Engine;
pub use vehicle::{Vehicle, VehicleDraft, WHEEL_COUNT};
pub use wheel::Wheel;
