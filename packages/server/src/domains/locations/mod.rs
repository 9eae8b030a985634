//! Locations domain - businesses whose local rankings are tracked

pub mod models;
pub mod repository;

pub use models::{Location, LocationInput};
pub use repository::{LocationRepository, PgLocationStore};
