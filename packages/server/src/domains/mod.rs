pub mod auth;
pub mod citations;
pub mod competitors;
pub mod keywords;
pub mod locations;
pub mod rankings;
pub mod recommendations;
