//! Song queries
//!
//! Every read filters on `deleted_at IS NULL`; soft-deleted rows stay in the
//! table but are invisible here.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use verse_core::{AuditFields, NewSong, Result, Song, SongFilter, SongId, VerseError};

const SONG_COLUMNS: &str =
    r#"id, created_at, updated_at, deleted_at, "group", song, release_date, text, link"#;

#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    group: String,
    song: String,
    release_date: String,
    text: String,
    link: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: SongId::new(row.id),
            audit: AuditFields {
                created_at: row.created_at,
                updated_at: row.updated_at,
                deleted_at: row.deleted_at,
            },
            group: row.group,
            song: row.song,
            release_date: row.release_date,
            text: row.text,
            link: row.link,
        }
    }
}

/// List songs matching `filter`, ordered by id
pub async fn find(
    pool: &PgPool,
    filter: &SongFilter,
    offset: u64,
    limit: u32,
) -> Result<Vec<Song>> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT ");
    query.push(SONG_COLUMNS);
    query.push(" FROM songs WHERE deleted_at IS NULL");

    if let Some(group) = &filter.group {
        query.push(r#" AND "group" = "#).push_bind(group.clone());
    }
    if let Some(song) = &filter.song {
        query.push(" AND song = ").push_bind(song.clone());
    }

    query
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(limit))
        .push(" OFFSET ")
        .push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

    let rows = query.build_query_as::<SongRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(Song::from).collect())
}

/// Get song by ID
pub async fn get_by_id(pool: &PgPool, id: SongId) -> Result<Option<Song>> {
    let sql = format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = $1 AND deleted_at IS NULL");

    let row: Option<SongRow> = sqlx::query_as(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Song::from))
}

/// Create a new song
pub async fn create(pool: &PgPool, song: NewSong) -> Result<Song> {
    let sql = format!(
        r#"INSERT INTO songs ("group", song, release_date, text, link)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {SONG_COLUMNS}"#
    );

    let row: SongRow = sqlx::query_as(&sql)
        .bind(song.group)
        .bind(song.song)
        .bind(song.release_date)
        .bind(song.text)
        .bind(song.link)
        .fetch_one(pool)
        .await?;

    Ok(row.into())
}

/// Write back every mutable field of an existing song
pub async fn update(pool: &PgPool, song: &Song) -> Result<Song> {
    let sql = format!(
        r#"UPDATE songs
           SET "group" = $1, song = $2, release_date = $3, text = $4, link = $5,
               updated_at = NOW()
           WHERE id = $6 AND deleted_at IS NULL
           RETURNING {SONG_COLUMNS}"#
    );

    let row: Option<SongRow> = sqlx::query_as(&sql)
        .bind(&song.group)
        .bind(&song.song)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.link)
        .bind(song.id)
        .fetch_optional(pool)
        .await?;

    row.map(Song::from).ok_or(VerseError::SongNotFound(song.id))
}

/// Soft-delete a song
pub async fn soft_delete(pool: &PgPool, id: SongId) -> Result<()> {
    let result =
        sqlx::query("UPDATE songs SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(VerseError::SongNotFound(id));
    }

    Ok(())
}
