//! Keywords domain - search phrases tracked per location

pub mod models;
pub mod repository;

pub use models::{Keyword, KeywordInput, KeywordListing};
pub use repository::{KeywordRepository, PgKeywordStore};
