//! Citations, competitors and recommendations. None of these touch the database.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domains::citations::CitationChecklist;
use crate::domains::competitors::{Competitor, CompetitorInput};
use crate::domains::recommendations::{list_recommendations, RecommendationList};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Serialize)]
pub struct CitationToggle {
    pub name: String,
    pub claimed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub category: Option<String>,
}

pub async fn list_citations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<CitationChecklist> {
    Json(state.citations.checklist(auth.user_id).await)
}

pub async fn toggle_citation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> Result<Json<CitationToggle>, ApiError> {
    let claimed = state
        .citations
        .toggle(auth.user_id, &name)
        .await
        .ok_or(ApiError::NotFound("Directory"))?;

    Ok(Json(CitationToggle { name, claimed }))
}

pub async fn list_competitors(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<Vec<Competitor>> {
    Json(state.competitors.list(auth.user_id).await)
}

pub async fn add_competitor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CompetitorInput>,
) -> Result<(StatusCode, Json<Competitor>), ApiError> {
    let competitor = state.competitors.add(auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(competitor)))
}

pub async fn remove_competitor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if !state.competitors.remove(auth.user_id, id).await {
        return Err(ApiError::NotFound("Competitor"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn recommendations(
    _auth: AuthUser,
    Query(params): Query<RecommendationParams>,
) -> Json<RecommendationList> {
    Json(list_recommendations(params.category.as_deref()))
}
