use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domains::rankings::RankingResult;
use crate::kernel::SearchMetadata;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct TrackRankingsParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    /// Accepted for clients that highlight their own listings; not used here.
    pub website: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackRankingsResponse {
    pub keyword: String,
    pub location: Option<String>,
    pub results: Vec<RankingResult>,
    pub total_results: usize,
    pub search_metadata: SearchMetadata,
}

/// `GET /api/track-rankings?keyword=&location=&website=`
///
/// A page rejected after the first one only shortens `results`; a rejected
/// first page is answered with the provider's own status.
pub async fn track_rankings_handler(
    State(state): State<AppState>,
    Query(params): Query<TrackRankingsParams>,
) -> Result<Json<TrackRankingsResponse>, ApiError> {
    let keyword = params
        .keyword
        .filter(|k| !k.trim().is_empty())
        .ok_or(ApiError::MissingParameter("keyword"))?;

    let aggregator = state.aggregator()?;

    let location = params.location.filter(|l| !l.trim().is_empty());
    if let Some(website) = &params.website {
        debug!(website = %website, "Website supplied for highlighting");
    }

    let collected = aggregator.collect(&keyword, location.as_deref()).await?;

    if let Some(failure) = collected.rejected_outright() {
        return Err(failure.clone().into());
    }

    Ok(Json(TrackRankingsResponse {
        keyword,
        location,
        total_results: collected.results.len(),
        results: collected.results,
        search_metadata: collected.search_metadata.unwrap_or_default(),
    }))
}
