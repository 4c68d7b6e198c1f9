//! Genius HTTP client.

use crate::error::{GeniusError, Result};
use crate::extract::{LyricsExtractor, SelectorExtractor};
use crate::types::SearchResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use verse_core::{LyricsPage, LyricsProvider, SearchHit};

/// Public Genius API
pub const DEFAULT_API_BASE_URL: &str = "https://api.genius.com";

/// Connection settings for [`GeniusClient`]
#[derive(Debug, Clone)]
pub struct GeniusConfig {
    /// Bearer token for the search API; searches fail without it
    pub access_token: Option<String>,
    pub api_base_url: String,
    /// Whole-request timeout for search and page fetches
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl GeniusConfig {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GeniusConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for the Genius search API and song pages.
///
/// Searching requires an access token; fetching song pages does not.
pub struct GeniusClient {
    http: Client,
    config: GeniusConfig,
    extractor: Arc<dyn LyricsExtractor>,
}

impl GeniusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeniusConfig) -> Result<Self> {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(GeniusError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            config: GeniusConfig {
                api_base_url: base_url,
                ..config
            },
            extractor: Arc::new(SelectorExtractor::genius()?),
        })
    }

    /// Replace the lyrics extraction strategy
    #[must_use]
    pub fn with_extractor(mut self, extractor: impl LyricsExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Normalized API base URL
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Search Genius for `artist` + `title`.
    pub async fn search_info(&self, artist: &str, title: &str) -> Result<SearchResponse> {
        let token = self
            .config
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(GeniusError::MissingToken)?;

        let url = format!("{}/search", self.config.api_base_url);
        let query = format!("{artist} {title}");

        debug!(url = %url, q = %query, "Searching Genius");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Genius search failed");
            return Err(GeniusError::SearchStatus {
                status: status.as_u16(),
            });
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| GeniusError::ParseError(e.to_string()))?;

        info!(
            artist = %artist,
            title = %title,
            hits = search.response.hits.len(),
            "Genius search complete"
        );

        Ok(search)
    }

    /// Download a song page and extract its lyrics.
    pub async fn fetch_lyrics_page(&self, url: &str) -> Result<LyricsPage> {
        debug!(url = %url, "Fetching song page");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Song page fetch failed");
            return Err(GeniusError::PageStatus {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let page = self.extractor.extract(&html)?;

        info!(
            url = %url,
            chars = page.lyrics.len(),
            has_release_date = !page.release_date.is_empty(),
            "Extracted lyrics"
        );

        Ok(page)
    }
}

#[async_trait]
impl LyricsProvider for GeniusClient {
    async fn search(&self, artist: &str, title: &str) -> verse_core::Result<Option<SearchHit>> {
        Ok(self.search_info(artist, title).await?.first_hit())
    }

    async fn fetch_lyrics(&self, url: &str) -> verse_core::Result<LyricsPage> {
        Ok(self.fetch_lyrics_page(url).await?)
    }
}
