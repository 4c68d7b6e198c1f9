use crate::songs;
use async_trait::async_trait;
use sqlx::PgPool;
use verse_core::{NewSong, Result, Song, SongFilter, SongId, SongRepository};

/// `PostgreSQL`-backed song repository
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct PgSongStore {
    pool: PgPool,
}

impl PgSongStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SongRepository for PgSongStore {
    async fn find(&self, filter: &SongFilter, offset: u64, limit: u32) -> Result<Vec<Song>> {
        songs::find(&self.pool, filter, offset, limit).await
    }

    async fn get(&self, id: SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn create(&self, song: NewSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn save(&self, song: &Song) -> Result<Song> {
        songs::update(&self.pool, song).await
    }

    async fn soft_delete(&self, id: SongId) -> Result<()> {
        songs::soft_delete(&self.pool, id).await
    }
}
