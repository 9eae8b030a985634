pub mod location;

pub use location::{Location, LocationInput};
