// Shared types used across domains
pub mod entity_ids;
pub mod id;
pub mod validation;

pub use entity_ids::*;
pub use validation::{require, ValidationError};
