//! Genius search API payloads.

use serde::{Deserialize, Serialize};
use verse_core::SearchHit;

/// `GET /search` response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub response: SearchResponseBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponseBody {
    #[serde(default)]
    pub hits: Vec<SearchHitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHitEntry {
    pub result: SearchHitResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHitResult {
    #[serde(default)]
    pub full_title: String,
    pub url: String,
}

impl SearchResponse {
    /// First hit, in the order Genius returned them
    pub fn first_hit(&self) -> Option<SearchHit> {
        self.response.hits.first().map(|hit| SearchHit {
            title: hit.result.full_title.clone(),
            url: hit.result.url.clone(),
        })
    }
}
