use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::UserId;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user_id: UserId,
}

/// Issue a session token, for a new user unless one is named.
///
/// There is no credential check; this stands in for an identity provider.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    body: Option<Json<TokenRequest>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user_id = body
        .and_then(|Json(request)| request.user_id)
        .unwrap_or_default();

    let token = state.jwt_service.create_token(user_id)?;
    info!(user_id = %user_id, "Issued session token");

    Ok(Json(TokenResponse { token, user_id }))
}
