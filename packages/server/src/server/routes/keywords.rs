use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::KeywordId;
use crate::domains::keywords::{Keyword, KeywordInput, KeywordListing};
use crate::domains::rankings::activities::{track_keyword, TrackedKeyword};
use crate::domains::rankings::{Ranking, LATEST_RANKINGS_LIMIT};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

const MAX_RANKINGS_LIMIT: i64 = 100;

/// Keyword with its most recent ranking rows
#[derive(Debug, Serialize)]
pub struct KeywordCard {
    #[serde(flatten)]
    pub keyword: KeywordListing,
    pub latest_rankings: Vec<Ranking>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RankingsParams {
    pub limit: Option<i64>,
}

pub async fn list_keywords(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<KeywordCard>>, ApiError> {
    let keywords = state.keywords.list(auth.user_id).await?;

    let mut cards = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let latest_rankings = state
            .rankings
            .latest(keyword.id, LATEST_RANKINGS_LIMIT)
            .await?;
        cards.push(KeywordCard {
            keyword,
            latest_rankings,
        });
    }

    Ok(Json(cards))
}

pub async fn create_keyword(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<KeywordInput>,
) -> Result<(StatusCode, Json<Keyword>), ApiError> {
    input.validate()?;

    if state
        .locations
        .find(auth.user_id, input.location_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Location"));
    }

    let keyword = state.keywords.create(&input).await?;
    info!(keyword_id = %keyword.id, keyword = %keyword.keyword, "Created keyword");

    Ok((StatusCode::CREATED, Json(keyword)))
}

/// Stored rankings for the keyword are not deleted.
pub async fn delete_keyword(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<KeywordId>,
) -> Result<StatusCode, ApiError> {
    if !state.keywords.delete(auth.user_id, id).await? {
        return Err(ApiError::NotFound("Keyword"));
    }

    info!(keyword_id = %id, "Deleted keyword");
    Ok(StatusCode::NO_CONTENT)
}

/// "Track Now": fetch fresh rankings and append them as a new batch.
pub async fn track_keyword_handler(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<KeywordId>,
) -> Result<Json<TrackedKeyword>, ApiError> {
    let keyword = state
        .keywords
        .find(auth.user_id, id)
        .await?
        .ok_or(ApiError::NotFound("Keyword"))?;

    let aggregator = state.aggregator()?;
    let tracked = track_keyword(&keyword, aggregator, state.rankings.as_ref()).await?;

    Ok(Json(tracked))
}

pub async fn keyword_rankings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<KeywordId>,
    Query(params): Query<RankingsParams>,
) -> Result<Json<Vec<Ranking>>, ApiError> {
    if state.keywords.find(auth.user_id, id).await?.is_none() {
        return Err(ApiError::NotFound("Keyword"));
    }

    let limit = params
        .limit
        .unwrap_or(LATEST_RANKINGS_LIMIT)
        .clamp(1, MAX_RANKINGS_LIMIT);

    Ok(Json(state.rankings.latest(id, limit).await?))
}
