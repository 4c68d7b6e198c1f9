/// Shared application state
use crate::services::EnrichmentService;
use std::sync::Arc;
use verse_core::SongRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub songs: Arc<dyn SongRepository>,
    pub enrichment: Arc<EnrichmentService>,
}

impl AppState {
    pub fn new(songs: Arc<dyn SongRepository>, enrichment: Arc<EnrichmentService>) -> Self {
        Self { songs, enrichment }
    }
}
