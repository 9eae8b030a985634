use async_trait::async_trait;
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::debug;

use super::serp_response::SerpResponse;

pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

#[derive(Error, Debug)]
pub enum SerpError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode SerpApi response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parameters for one provider page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpQuery {
    pub keyword: String,
    /// Already normalized; sent verbatim.
    pub location: Option<String>,
    pub num: u32,
    pub start: u32,
}

/// What the provider answered for one page.
#[derive(Debug, Clone)]
pub enum ProviderReply {
    Page(SerpResponse),
    /// Non-2xx answer with its status code and body text.
    Rejected { status: u16, body: String },
}

/// A search-results provider. Transport and decode failures are errors;
/// a non-success HTTP answer is a [`ProviderReply::Rejected`] value.
#[async_trait]
pub trait SerpProvider: Send + Sync {
    async fn fetch_page(&self, query: &SerpQuery) -> Result<ProviderReply, SerpError>;
}

/// SerpApi client for the `google` engine
pub struct SerpApiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SerpApiClient {
    pub fn new(api_key: String) -> Result<Self, SerpError> {
        Self::with_base_url(api_key, DEFAULT_SERPAPI_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self, SerpError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("localrank/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn query_params(&self, query: &SerpQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("q", query.keyword.clone()),
            ("engine", "google".to_string()),
            ("num", query.num.to_string()),
            ("start", query.start.to_string()),
        ];

        if let Some(location) = &query.location {
            params.push(("location", location.clone()));
            params.push(("hl", "en".to_string()));
            params.push(("gl", "us".to_string()));
        }

        params
    }
}

#[async_trait]
impl SerpProvider for SerpApiClient {
    async fn fetch_page(&self, query: &SerpQuery) -> Result<ProviderReply, SerpError> {
        debug!(
            keyword = %query.keyword,
            location = ?query.location,
            start = query.start,
            num = query.num,
            "Requesting SerpApi page"
        );

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(ACCEPT, "application/json")
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Ok(ProviderReply::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let page: SerpResponse = serde_json::from_str(&body)?;

        Ok(ProviderReply::Page(page))
    }
}
