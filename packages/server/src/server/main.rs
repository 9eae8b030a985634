// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use localrank_core::domains::auth::JwtService;
use localrank_core::domains::rankings::RankingAggregator;
use localrank_core::kernel::SerpApiClient;
use localrank_core::server::{build_app, AppState};
use localrank_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,localrank_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LocalRank API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        page_size = config.aggregator.page_size,
        max_pages = config.aggregator.max_pages,
        "Configuration loaded"
    );

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let aggregator = match &config.serpapi_key {
        Some(key) => {
            let client = SerpApiClient::with_base_url(key.clone(), config.serpapi_base_url.clone())
                .context("Failed to create SerpApi client")?;
            Some(RankingAggregator::new(Arc::new(client), config.aggregator))
        }
        None => {
            tracing::warn!("SERPAPI_KEY not set; /api/track-rankings will answer 500");
            None
        }
    };

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));
    let state = AppState::new(pool, aggregator, jwt_service);
    let app = build_app(state, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
