//! Lyrics extraction from song page HTML.
//!
//! Extraction is kept apart from the HTTP client so the selector strategy can
//! be swapped or tested against fixture HTML without any network I/O.

use crate::error::{GeniusError, Result};
use scraper::{ElementRef, Html, Node, Selector};
use verse_core::LyricsPage;

/// Legacy Genius page layout
pub const PRIMARY_LYRICS_SELECTOR: &str = ".lyrics";

/// Current Genius layout; class names carry a build hash suffix
pub const FALLBACK_LYRICS_SELECTOR: &str = "div[class^='Lyrics__Container']";

/// Release date element. Rarely present on current pages.
pub const RELEASE_DATE_SELECTOR: &str = ".releaseDate";

/// Turns a song page into lyric text
pub trait LyricsExtractor: Send + Sync {
    /// Extract lyrics and release date from `html`
    ///
    /// # Errors
    /// Returns [`GeniusError::LyricsNotFound`] when the page holds no lyric text
    fn extract(&self, html: &str) -> Result<LyricsPage>;
}

/// Primary selector with one fallback
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    primary: Selector,
    primary_css: String,
    fallback: Selector,
    fallback_css: String,
    release_date: Selector,
}

impl SelectorExtractor {
    /// Build an extractor from arbitrary selectors
    pub fn new(primary: &str, fallback: &str, release_date: &str) -> Result<Self> {
        Ok(Self {
            primary: parse_selector(primary)?,
            primary_css: primary.to_string(),
            fallback: parse_selector(fallback)?,
            fallback_css: fallback.to_string(),
            release_date: parse_selector(release_date)?,
        })
    }

    /// Selectors matching Genius song pages
    pub fn genius() -> Result<Self> {
        Self::new(
            PRIMARY_LYRICS_SELECTOR,
            FALLBACK_LYRICS_SELECTOR,
            RELEASE_DATE_SELECTOR,
        )
    }
}

impl LyricsExtractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Result<LyricsPage> {
        let document = Html::parse_document(html);

        let mut lyrics = collect_text(&document, &self.primary);
        if lyrics.trim().is_empty() {
            tracing::debug!(selector = %self.fallback_css, "Primary lyrics selector empty, trying fallback");
            lyrics = collect_text(&document, &self.fallback);
        }

        if lyrics.trim().is_empty() {
            return Err(GeniusError::LyricsNotFound {
                primary: self.primary_css.clone(),
                fallback: self.fallback_css.clone(),
            });
        }

        let release_date = collect_text(&document, &self.release_date)
            .trim()
            .to_string();

        Ok(LyricsPage {
            lyrics,
            release_date,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| GeniusError::InvalidSelector(css.to_string()))
}

/// Text of every match, one match per line
fn collect_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(|element| {
            let mut text = String::new();
            push_text(element, &mut text);
            text
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(node) {
                    push_text(child, out);
                }
            }
            _ => {}
        }
    }
}
