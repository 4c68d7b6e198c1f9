//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use verse_core::{
    AuditFields, LyricsPage, LyricsProvider, NewSong, Result, SearchHit, Song, SongFilter, SongId,
    SongRepository, VerseError,
};
use verse_server::{api, services::EnrichmentService, state::AppState};

/// In-memory `SongRepository` with the same visibility rules as the
/// PostgreSQL store
#[derive(Default)]
pub struct MemorySongStore {
    rows: Mutex<Vec<Song>>,
    fail_writes: AtomicBool,
}

impl MemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create` and `save` fail with a database error
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Every row, soft-deleted ones included
    pub fn all_rows(&self) -> Vec<Song> {
        self.rows.lock().unwrap().clone()
    }

    pub fn active_count(&self) -> usize {
        self.all_rows()
            .iter()
            .filter(|s| !s.audit.is_deleted())
            .count()
    }

    pub fn insert(&self, song: NewSong) -> Song {
        let mut rows = self.rows.lock().unwrap();
        let stored = Song {
            id: SongId::new(rows.len() as i64 + 1),
            audit: AuditFields::new(Utc::now()),
            group: song.group,
            song: song.song,
            release_date: song.release_date,
            text: song.text,
            link: song.link,
        };
        rows.push(stored.clone());
        stored
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(VerseError::Database("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SongRepository for MemorySongStore {
    async fn find(&self, filter: &SongFilter, offset: u64, limit: u32) -> Result<Vec<Song>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|s| !s.audit.is_deleted() && filter.matches(s))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: SongId) -> Result<Option<Song>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|s| s.id == id && !s.audit.is_deleted())
            .cloned())
    }

    async fn create(&self, song: NewSong) -> Result<Song> {
        self.check_writes()?;
        Ok(self.insert(song))
    }

    async fn save(&self, song: &Song) -> Result<Song> {
        self.check_writes()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == song.id && !s.audit.is_deleted())
            .ok_or(VerseError::SongNotFound(song.id))?;

        let audit = AuditFields {
            updated_at: Utc::now(),
            ..row.audit.clone()
        };
        *row = Song {
            audit,
            ..song.clone()
        };
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: SongId) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == id && !s.audit.is_deleted())
            .ok_or(VerseError::SongNotFound(id))?;
        row.audit.deleted_at = Some(Utc::now());
        Ok(())
    }
}

/// Canned `LyricsProvider`
pub struct StubProvider {
    search: std::result::Result<Option<SearchHit>, String>,
    page: std::result::Result<LyricsPage, String>,
    pub fetched: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn no_hits() -> Self {
        Self {
            search: Ok(None),
            page: Err("page should not be fetched".to_string()),
            fetched: Mutex::default(),
        }
    }

    pub fn with_lyrics(url: &str, lyrics: &str, release_date: &str) -> Self {
        Self {
            search: Ok(Some(fixtures::hit(url))),
            page: Ok(LyricsPage {
                lyrics: lyrics.to_string(),
                release_date: release_date.to_string(),
            }),
            fetched: Mutex::default(),
        }
    }

    pub fn fetch_fails(url: &str, message: &str) -> Self {
        Self {
            search: Ok(Some(fixtures::hit(url))),
            page: Err(message.to_string()),
            fetched: Mutex::default(),
        }
    }

    pub fn search_fails(message: &str) -> Self {
        Self {
            search: Err(message.to_string()),
            page: Err("page should not be fetched".to_string()),
            fetched: Mutex::default(),
        }
    }
}

#[async_trait]
impl LyricsProvider for StubProvider {
    async fn search(&self, _artist: &str, _title: &str) -> Result<Option<SearchHit>> {
        self.search.clone().map_err(VerseError::provider)
    }

    async fn fetch_lyrics(&self, url: &str) -> Result<LyricsPage> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.page.clone().map_err(VerseError::provider)
    }
}

/// Test application wired to in-memory doubles
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemorySongStore>,
    pub provider: Arc<StubProvider>,
}

pub fn create_test_app(provider: StubProvider) -> TestApp {
    create_test_app_with(provider, false)
}

pub fn create_test_app_with(provider: StubProvider, strict: bool) -> TestApp {
    let store = Arc::new(MemorySongStore::new());
    let provider = Arc::new(provider);

    let enrichment = Arc::new(EnrichmentService::new(provider.clone(), strict));
    let app_state = AppState::new(store.clone(), enrichment);

    TestApp {
        router: api::router(app_state),
        store,
        provider,
    }
}

/// Send a request and return the status plus the raw body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// Send a request and parse the body as JSON
pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(router, request).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("Body is not JSON ({e}): {}", String::from_utf8_lossy(&body)));
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_body(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Test fixtures
pub mod fixtures {
    use verse_core::{NewSong, SearchHit};

    pub const SONG_URL: &str = "https://genius.com/Muse-supermassive-black-hole-lyrics";
    pub const LYRICS: &str = "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nYou set my soul alight";

    pub fn hit(url: &str) -> SearchHit {
        SearchHit {
            title: "Supermassive Black Hole by Muse".to_string(),
            url: url.to_string(),
        }
    }

    pub fn song(group: &str, title: &str) -> NewSong {
        NewSong::new(group, title)
    }

    pub fn song_with_text(group: &str, title: &str, text: &str) -> NewSong {
        NewSong {
            text: text.to_string(),
            ..NewSong::new(group, title)
        }
    }
}
