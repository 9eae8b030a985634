//! Error responses at the HTTP boundary.
//!
//! Every failure leaves the server as `{ "error": ..., "details"?: ... }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::common::ValidationError;
use crate::domains::rankings::activities::TrackError;
use crate::domains::rankings::UpstreamFailure;
use crate::kernel::SerpError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Server configuration error: SerpApi key not found")]
    MissingSerpKey,

    /// Provider refused the first page; its status and body are passed through.
    #[error("SerpApi error: {status}")]
    Upstream { status: u16, body: String },

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(context: &'static str, source: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal {
            context,
            source: source.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingSerpKey => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(source: anyhow::Error) -> Self {
        ApiError::internal("Internal server error", source)
    }
}

impl From<SerpError> for ApiError {
    fn from(source: SerpError) -> Self {
        ApiError::internal("Failed to fetch rankings", source)
    }
}

impl From<UpstreamFailure> for ApiError {
    fn from(failure: UpstreamFailure) -> Self {
        ApiError::Upstream {
            status: failure.status,
            body: failure.body,
        }
    }
}

impl From<TrackError> for ApiError {
    fn from(err: TrackError) -> Self {
        match err {
            TrackError::Serp(e) => e.into(),
            TrackError::Rejected(failure) => failure.into(),
            TrackError::Storage(e) => ApiError::internal("Failed to store rankings", e),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            ApiError::Upstream { body, .. } => Some(body.clone()),
            ApiError::Internal { context, source } => {
                error!(error = %format!("{:#}", source), "{}", context);
                Some(format!("{:#}", source))
            }
            _ => None,
        };

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
