//! Core error types for Verse

use crate::types::SongId;
use thiserror::Error;

/// Result type alias using `VerseError`
pub type Result<T> = std::result::Result<T, VerseError>;

/// Core error type for Verse
#[derive(Error, Debug)]
pub enum VerseError {
    /// Song not found (or soft-deleted)
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Lyrics provider is not configured (missing token, bad base URL)
    #[error("Provider configuration error: {0}")]
    ProviderConfig(String),

    /// Lyrics provider request or response failed
    #[error("Provider error: {0}")]
    Provider(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl VerseError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for VerseError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
