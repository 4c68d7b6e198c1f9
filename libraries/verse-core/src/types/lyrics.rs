/// Lyrics provider result types
use serde::{Deserialize, Serialize};

/// First search hit returned by a lyrics provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Display title ("Artist - Title")
    pub title: String,
    /// URL of the song page holding the lyrics
    pub url: String,
}

/// Lyrics scraped from a song page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsPage {
    /// Lyric text as extracted, lines separated by `\n`
    pub lyrics: String,
    /// Release date as shown on the page; frequently empty
    pub release_date: String,
}
