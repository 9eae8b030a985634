//! Paginated ranking collection.
//!
//! Pages are requested one after another with an increasing `start` offset.
//! Collection stops at the page cap, at the first page that comes back with
//! fewer listings than requested, or at the first non-success answer. A
//! rejected page truncates the run; it is reported in
//! [`AggregatedRankings::upstream_failure`] rather than as an error.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use super::location_format::format_location;
use super::models::RankingResult;
use crate::kernel::{ProviderReply, SearchMetadata, SerpError, SerpProvider, SerpQuery};

/// Page size and page cap for one tracking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub page_size: u32,
    pub max_pages: u32,
}

impl AggregatorConfig {
    /// Ten pages of ten (up to 100 listings).
    pub const fn paginated() -> Self {
        Self {
            page_size: 10,
            max_pages: 10,
        }
    }

    /// One request for twenty listings.
    pub const fn single_shot() -> Self {
        Self {
            page_size: 20,
            max_pages: 1,
        }
    }

    /// Parse a `SERP_MODE` value
    pub fn from_mode(mode: &str) -> Result<Self> {
        match mode.trim().to_lowercase().as_str() {
            "paginated" => Ok(Self::paginated()),
            "single" => Ok(Self::single_shot()),
            other => Err(anyhow::anyhow!(
                "Invalid SERP_MODE '{}': expected 'paginated' or 'single'",
                other
            )),
        }
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::paginated()
    }
}

/// Provider answer that ended collection early
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamFailure {
    pub status: u16,
    pub body: String,
    /// Zero-based index of the rejected page.
    pub page_index: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AggregatedRankings {
    pub results: Vec<RankingResult>,
    pub pages_fetched: u32,
    /// Metadata of the first page that was answered.
    pub search_metadata: Option<SearchMetadata>,
    pub upstream_failure: Option<UpstreamFailure>,
}

impl AggregatedRankings {
    /// True when the very first page was rejected, so nothing was collected.
    pub fn rejected_outright(&self) -> Option<&UpstreamFailure> {
        self.upstream_failure
            .as_ref()
            .filter(|failure| failure.page_index == 0)
    }
}

#[derive(Clone)]
pub struct RankingAggregator {
    provider: Arc<dyn SerpProvider>,
    config: AggregatorConfig,
}

impl RankingAggregator {
    pub fn new(provider: Arc<dyn SerpProvider>, config: AggregatorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> AggregatorConfig {
        self.config
    }

    /// Collect ranked listings for `keyword`, optionally scoped to a free-text
    /// location. Positions run from 1 across every page fetched.
    pub async fn collect(
        &self,
        keyword: &str,
        location: Option<&str>,
    ) -> Result<AggregatedRankings, SerpError> {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(format_location);

        let mut collected = AggregatedRankings::default();

        for page_index in 0..self.config.max_pages {
            let query = SerpQuery {
                keyword: keyword.to_string(),
                location: location.clone(),
                num: self.config.page_size,
                start: page_index * self.config.page_size,
            };

            let page = match self.provider.fetch_page(&query).await? {
                ProviderReply::Page(page) => page,
                ProviderReply::Rejected { status, body } => {
                    warn!(
                        keyword = %keyword,
                        status,
                        page_index,
                        "SerpApi rejected page, keeping results collected so far"
                    );
                    collected.upstream_failure = Some(UpstreamFailure {
                        status,
                        body,
                        page_index,
                    });
                    break;
                }
            };

            collected.pages_fetched += 1;
            if collected.search_metadata.is_none() {
                collected.search_metadata = page.search_metadata.clone();
            }

            let items = page.into_items();
            let page_len = items.len();
            for item in items {
                let position = collected.results.len() as u32 + 1;
                collected.results.push(RankingResult::from_item(item, position));
            }

            if (page_len as u32) < self.config.page_size {
                break;
            }
        }

        info!(
            keyword = %keyword,
            location = ?location,
            results = collected.results.len(),
            pages = collected.pages_fetched,
            truncated = collected.upstream_failure.is_some(),
            "Collected rankings"
        );

        Ok(collected)
    }
}
