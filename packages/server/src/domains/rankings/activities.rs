//! Ranking activities
//!
//! "Track Now" for a stored keyword: collect, persist as a new batch, re-read.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::aggregator::{RankingAggregator, UpstreamFailure};
use super::models::Ranking;
use super::repository::{RankingRepository, LATEST_RANKINGS_LIMIT};
use crate::common::KeywordId;
use crate::domains::keywords::KeywordListing;
use crate::domains::locations::LocationInput;
use crate::kernel::SerpError;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Serp(#[from] SerpError),

    #[error("SerpApi error: {}", .0.status)]
    Rejected(UpstreamFailure),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedKeyword {
    pub keyword_id: KeywordId,
    pub inserted: u64,
    pub total_results: usize,
    pub rankings: Vec<Ranking>,
}

/// Track a stored keyword at its location's city and state.
pub async fn track_keyword(
    keyword: &KeywordListing,
    aggregator: &RankingAggregator,
    rankings: &dyn RankingRepository,
) -> Result<TrackedKeyword, TrackError> {
    let location = LocationInput::search_location(&keyword.city, &keyword.state);

    info!(keyword_id = %keyword.id, keyword = %keyword.keyword, location = ?location, "Tracking keyword");

    let collected = aggregator
        .collect(&keyword.keyword, location.as_deref())
        .await?;

    if let Some(failure) = collected.rejected_outright() {
        return Err(TrackError::Rejected(failure.clone()));
    }

    let inserted = rankings.insert_batch(keyword.id, &collected.results).await?;
    let latest = rankings.latest(keyword.id, LATEST_RANKINGS_LIMIT).await?;

    info!(keyword_id = %keyword.id, inserted, "Stored ranking batch");

    Ok(TrackedKeyword {
        keyword_id: keyword.id,
        inserted,
        total_results: collected.results.len(),
        rankings: latest,
    })
}
