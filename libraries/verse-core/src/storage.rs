//! Storage trait for the song catalog

use crate::error::Result;
use crate::types::{NewSong, Song, SongFilter, SongId};
use async_trait::async_trait;

/// Repository over the `songs` table
///
/// Soft-deleted songs are invisible to every method: `find` skips them,
/// `get` returns `None`, and `save` / `soft_delete` report
/// [`VerseError::SongNotFound`](crate::VerseError::SongNotFound).
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// List songs matching `filter`, ordered by id, skipping `offset` rows
    /// and returning at most `limit`
    async fn find(&self, filter: &SongFilter, offset: u64, limit: u32) -> Result<Vec<Song>>;

    /// Get a song by id
    async fn get(&self, id: SongId) -> Result<Option<Song>>;

    /// Insert a new song and return it with its assigned id and timestamps
    async fn create(&self, song: NewSong) -> Result<Song>;

    /// Persist every mutable field of `song`, refreshing `updated_at`
    async fn save(&self, song: &Song) -> Result<Song>;

    /// Mark a song as deleted
    async fn soft_delete(&self, id: SongId) -> Result<()>;
}
