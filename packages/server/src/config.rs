use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::rankings::AggregatorConfig;
use crate::kernel::DEFAULT_SERPAPI_BASE_URL;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Missing key is not fatal at boot; the tracking endpoint answers 500.
    pub serpapi_key: Option<String>,
    pub serpapi_base_url: String,
    pub aggregator: AggregatorConfig,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            serpapi_key: env::var("SERPAPI_KEY").ok().filter(|k| !k.trim().is_empty()),
            serpapi_base_url: env::var("SERPAPI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SERPAPI_BASE_URL.to_string()),
            aggregator: match env::var("SERP_MODE") {
                Ok(mode) => AggregatorConfig::from_mode(&mode)?,
                Err(_) => AggregatorConfig::default(),
            },
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "localrank".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
