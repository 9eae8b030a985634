// LocalRank - local SEO rank tracking API
//
// Business locations, the keywords tracked for them, and ranking snapshots
// fetched from SerpApi.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
