//! Rankings domain - SERP collection and ranking snapshots

pub mod activities;
pub mod aggregator;
pub mod location_format;
pub mod models;
pub mod repository;

pub use aggregator::{AggregatedRankings, AggregatorConfig, RankingAggregator, UpstreamFailure};
pub use location_format::format_location;
pub use models::{Ranking, RankingResult, SerpType, RESULTS_PER_SERP_PAGE};
pub use repository::{PgRankingStore, RankingRepository, LATEST_RANKINGS_LIMIT};
