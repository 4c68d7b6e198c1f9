//! Core traits for Verse
use crate::error::Result;
use crate::types::{LyricsPage, SearchHit};
use async_trait::async_trait;

/// External lyrics provider
///
/// Implementers look songs up on a remote catalog and scrape lyric text from
/// the page a search hit points to.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Search for `artist` + `title` and return the first hit
    ///
    /// Returns `Ok(None)` when the provider has no hits.
    ///
    /// # Errors
    /// Returns an error if the provider is not configured, the request fails,
    /// or the response is not a success
    async fn search(&self, artist: &str, title: &str) -> Result<Option<SearchHit>>;

    /// Fetch the page at `url` and extract its lyrics
    ///
    /// # Errors
    /// Returns an error if the page cannot be fetched or contains no lyrics
    async fn fetch_lyrics(&self, url: &str) -> Result<LyricsPage>;
}
