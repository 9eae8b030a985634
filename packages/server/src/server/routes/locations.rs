use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::common::LocationId;
use crate::domains::locations::{Location, LocationInput};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

pub async fn list_locations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Location>>, ApiError> {
    Ok(Json(state.locations.list(auth.user_id).await?))
}

pub async fn get_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LocationId>,
) -> Result<Json<Location>, ApiError> {
    state
        .locations
        .find(auth.user_id, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Location"))
}

pub async fn create_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<LocationInput>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    input.validate()?;

    let location = state.locations.create(auth.user_id, &input).await?;
    info!(location_id = %location.id, business = %location.business_name, "Created location");

    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn update_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LocationId>,
    Json(input): Json<LocationInput>,
) -> Result<Json<Location>, ApiError> {
    input.validate()?;

    state
        .locations
        .update(auth.user_id, id, &input)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Location"))
}

pub async fn delete_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<LocationId>,
) -> Result<StatusCode, ApiError> {
    if !state.locations.delete(auth.user_id, id).await? {
        return Err(ApiError::NotFound("Location"));
    }

    info!(location_id = %id, "Deleted location");
    Ok(StatusCode::NO_CONTENT)
}
