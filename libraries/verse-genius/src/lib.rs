//! Genius client for Verse.
//!
//! Looks songs up through the Genius search API and scrapes lyric text from
//! the song page a search hit points to.
//!
//! # Example
//!
//! ```ignore
//! use verse_genius::{GeniusClient, GeniusConfig};
//!
//! let config = GeniusConfig::new(std::env::var("GENIUS_ACCESS_TOKEN").ok());
//! let client = GeniusClient::new(config)?;
//!
//! if let Some(hit) = client.search_info("Muse", "Uprising").await?.first_hit() {
//!     let page = client.fetch_lyrics_page(&hit.url).await?;
//!     println!("{}", page.lyrics);
//! }
//! ```

mod client;
mod error;
mod extract;
mod types;

pub use client::{GeniusClient, GeniusConfig, DEFAULT_API_BASE_URL};
pub use error::{GeniusError, Result};
pub use extract::{
    LyricsExtractor, SelectorExtractor, FALLBACK_LYRICS_SELECTOR,
    PRIMARY_LYRICS_SELECTOR, RELEASE_DATE_SELECTOR,
};
pub use types::{SearchHitEntry, SearchHitResult, SearchResponse, SearchResponseBody};
