//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::domains::citations::CitationTracker;
use crate::domains::competitors::CompetitorBook;
use crate::domains::keywords::{KeywordRepository, PgKeywordStore};
use crate::domains::locations::{LocationRepository, PgLocationStore};
use crate::domains::rankings::{PgRankingStore, RankingAggregator, RankingRepository};
use crate::server::error::ApiError;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    add_competitor, create_keyword, create_location, delete_keyword, delete_location,
    get_location, health_handler, issue_token_handler, keyword_rankings, list_citations,
    list_competitors, list_keywords, list_locations, recommendations, remove_competitor,
    toggle_citation, track_keyword_handler, track_rankings_handler, update_location,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub locations: Arc<dyn LocationRepository>,
    pub keywords: Arc<dyn KeywordRepository>,
    pub rankings: Arc<dyn RankingRepository>,
    /// `None` when no SerpApi key is configured.
    pub aggregator: Option<RankingAggregator>,
    pub jwt_service: Arc<JwtService>,
    pub citations: Arc<CitationTracker>,
    pub competitors: Arc<CompetitorBook>,
}

impl AppState {
    /// State backed by Postgres repositories on `pool`.
    pub fn new(
        pool: PgPool,
        aggregator: Option<RankingAggregator>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            locations: Arc::new(PgLocationStore::new(pool.clone())),
            keywords: Arc::new(PgKeywordStore::new(pool.clone())),
            rankings: Arc::new(PgRankingStore::new(pool.clone())),
            db_pool: pool,
            aggregator,
            jwt_service,
            citations: Arc::new(CitationTracker::new()),
            competitors: Arc::new(CompetitorBook::new()),
        }
    }

    pub fn aggregator(&self) -> Result<&RankingAggregator, ApiError> {
        self.aggregator.as_ref().ok_or(ApiError::MissingSerpKey)
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let jwt_service = state.jwt_service.clone();

    Router::new()
        .route("/health", get(health_handler))
        // Public SERP proxy
        .route("/api/track-rankings", get(track_rankings_handler))
        .route("/api/auth/token", post(issue_token_handler))
        // Locations
        .route("/api/locations", get(list_locations).post(create_location))
        .route(
            "/api/locations/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
        // Keywords and their rankings
        .route("/api/keywords", get(list_keywords).post(create_keyword))
        .route("/api/keywords/:id", delete(delete_keyword))
        .route("/api/keywords/:id/track", post(track_keyword_handler))
        .route("/api/keywords/:id/rankings", get(keyword_rankings))
        // Screens without persistence
        .route("/api/citations", get(list_citations))
        .route("/api/citations/:name/toggle", post(toggle_citation))
        .route("/api/competitors", get(list_competitors).post(add_competitor))
        .route("/api/competitors/:id", delete(remove_competitor))
        .route("/api/recommendations", get(recommendations))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
