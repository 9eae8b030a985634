//! Kernel module - outbound infrastructure.

pub mod serp_response;
pub mod serpapi_client;

pub use serp_response::{LocalPlace, LocalResults, OrganicResult, SearchMetadata, SerpItem, SerpResponse};
pub use serpapi_client::{
    ProviderReply, SerpApiClient, SerpError, SerpProvider, SerpQuery, DEFAULT_SERPAPI_BASE_URL,
};
