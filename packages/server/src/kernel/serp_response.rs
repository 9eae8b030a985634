//! SerpApi response shapes.
//!
//! The provider is inconsistent about `local_results`: sometimes it is the
//! list of places itself, sometimes an object that nests the list under
//! `places`. Both are decoded once here into [`LocalResults`] and flattened
//! by [`SerpResponse::into_items`], so nothing downstream inspects raw JSON.

use serde::{Deserialize, Serialize};

use crate::domains::rankings::models::SerpType;

/// One page of a SerpApi `google` engine response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpResponse {
    #[serde(default)]
    pub organic_results: Option<Vec<OrganicResult>>,
    #[serde(default)]
    pub local_results: Option<LocalResults>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// A map-pack listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalPlace {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocalResults {
    /// `"local_results": [ {...}, ... ]`
    List(Vec<LocalPlace>),
    /// `"local_results": { "places": [ {...}, ... ] }`
    Nested {
        #[serde(default)]
        places: Vec<LocalPlace>,
    },
    /// Anything else carries no listings.
    Unrecognized(serde_json::Value),
}

impl LocalResults {
    pub fn into_places(self) -> Vec<LocalPlace> {
        match self {
            LocalResults::List(places) | LocalResults::Nested { places } => places,
            LocalResults::Unrecognized(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Provider listing reduced to the fields rank tracking keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpItem {
    pub serp_type: SerpType,
    pub url: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

impl From<OrganicResult> for SerpItem {
    fn from(result: OrganicResult) -> Self {
        Self {
            serp_type: SerpType::Organic,
            url: result.link.unwrap_or_default(),
            title: result.title,
            snippet: result.snippet,
        }
    }
}

impl From<LocalPlace> for SerpItem {
    fn from(place: LocalPlace) -> Self {
        Self {
            serp_type: SerpType::Maps,
            url: place.link.or(place.website).unwrap_or_default(),
            title: place.title,
            snippet: place.snippet.or(place.address),
        }
    }
}

impl SerpResponse {
    /// Organic listings first, then the local pack, in provider order.
    pub fn into_items(self) -> Vec<SerpItem> {
        let organic = self.organic_results.unwrap_or_default();
        let local = self
            .local_results
            .map(LocalResults::into_places)
            .unwrap_or_default();

        organic
            .into_iter()
            .map(SerpItem::from)
            .chain(local.into_iter().map(SerpItem::from))
            .collect()
    }
}
