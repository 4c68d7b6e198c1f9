//! Error types for the Genius client.

use thiserror::Error;
use verse_core::VerseError;

/// Errors that can occur when talking to Genius.
#[derive(Error, Debug)]
pub enum GeniusError {
    /// No access token configured
    #[error("Genius access token not found")]
    MissingToken,

    /// Invalid API base URL
    #[error("Invalid Genius URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Search API returned a non-success status
    #[error("failed to fetch song info, status: {status}")]
    SearchStatus { status: u16 },

    /// Song page returned a non-success status
    #[error("failed to fetch song page, status: {status}")]
    PageStatus { status: u16 },

    /// Search response was not the expected JSON
    #[error("Failed to parse search response: {0}")]
    ParseError(String),

    /// A CSS selector could not be compiled
    #[error("Invalid CSS selector '{0}'")]
    InvalidSelector(String),

    /// Neither the primary nor the fallback selector produced text
    #[error("no lyrics found with selectors '{primary}' or '{fallback}'")]
    LyricsNotFound { primary: String, fallback: String },
}

/// Result type for Genius operations.
pub type Result<T> = std::result::Result<T, GeniusError>;

impl From<GeniusError> for VerseError {
    fn from(err: GeniusError) -> Self {
        let message = err.to_string();
        match err {
            GeniusError::MissingToken | GeniusError::InvalidUrl(_) => {
                VerseError::ProviderConfig(message)
            }
            _ => VerseError::provider(message),
        }
    }
}
