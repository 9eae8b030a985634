//! Auth domain - session tokens identifying the owning user

pub mod jwt;

pub use jwt::{Claims, JwtService};
