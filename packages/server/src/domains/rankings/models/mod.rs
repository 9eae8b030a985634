pub mod ranking;

pub use ranking::{Ranking, RankingResult, SerpType, RESULTS_PER_SERP_PAGE};
