// HTTP routes
pub mod auth;
pub mod health;
pub mod keywords;
pub mod locations;
pub mod screens;
pub mod track_rankings;

pub use auth::*;
pub use health::*;
pub use keywords::*;
pub use locations::*;
pub use screens::*;
pub use track_rankings::*;
