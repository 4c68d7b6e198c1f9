/// Song enrichment from the lyrics provider
use std::sync::Arc;
use tracing::{debug, info, warn};
use verse_core::{LyricsProvider, NewSong, Result, VerseError};

/// What enrichment did to a new song
#[derive(Debug)]
pub enum EnrichmentOutcome {
    /// Provider had no hits; the song is untouched
    NoMatch,
    /// Link, lyrics and release date were filled in
    Enriched,
    /// A hit was found but its page could not be scraped.
    ///
    /// The link is set, lyrics and release date are cleared.
    FetchFailed(VerseError),
}

/// A new song after enrichment, ready to persist
#[derive(Debug)]
pub struct Enrichment {
    pub song: NewSong,
    pub outcome: EnrichmentOutcome,
}

/// Fills in link, lyrics and release date for songs being created
pub struct EnrichmentService {
    provider: Arc<dyn LyricsProvider>,
    strict: bool,
}

impl EnrichmentService {
    /// `strict` makes a failed page fetch abort song creation instead of
    /// saving the song without lyrics
    pub fn new(provider: Arc<dyn LyricsProvider>, strict: bool) -> Self {
        Self { provider, strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Search for the song and scrape the first hit
    ///
    /// # Errors
    /// Only a failed search is an error. A failed page fetch is reported
    /// through [`EnrichmentOutcome::FetchFailed`].
    pub async fn enrich(&self, mut song: NewSong) -> Result<Enrichment> {
        let Some(hit) = self.provider.search(&song.group, &song.song).await? else {
            debug!(group = %song.group, song = %song.song, "No provider match");
            return Ok(Enrichment {
                song,
                outcome: EnrichmentOutcome::NoMatch,
            });
        };

        song.link = hit.url;

        let outcome = match self.provider.fetch_lyrics(&song.link).await {
            Ok(page) => {
                song.text = page.lyrics;
                song.release_date = page.release_date;
                info!(link = %song.link, "Song enriched");
                EnrichmentOutcome::Enriched
            }
            Err(e) => {
                warn!(link = %song.link, error = %e, "Failed to retrieve lyrics");
                song.text.clear();
                song.release_date.clear();
                EnrichmentOutcome::FetchFailed(e)
            }
        };

        Ok(Enrichment { song, outcome })
    }
}
