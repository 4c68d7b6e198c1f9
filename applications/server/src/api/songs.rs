/// Songs API routes
use crate::{
    error::{Result, ServerError},
    services::EnrichmentOutcome,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{error, info, warn};
use verse_core::{
    paginate_verses, NewSong, Pagination, Song, SongFilter, SongId, SongPatch, VerseError,
    VersePage,
};

/// Raw query pairs in request order
///
/// Repeated keys resolve to their first value and invalid numbers are
/// coerced later, so a query string is never rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value given for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// POST /songs
/// Create a song, enriching it from the lyrics provider first
pub async fn create_song(State(app_state): State<AppState>, body: Bytes) -> Result<Response> {
    let new_song: NewSong = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Error decoding song");
        ServerError::BadRequest("Failed to decode the song".to_string())
    })?;

    let enrichment = app_state
        .enrichment
        .enrich(new_song)
        .await
        .map_err(|e| ServerError::Upstream(format!("Failed to retrieve song info: {e}")))?;

    let fetch_error = match enrichment.outcome {
        EnrichmentOutcome::FetchFailed(e) => {
            let message = format!("Failed to retrieve lyrics: {e}");
            if app_state.enrichment.is_strict() {
                return Err(ServerError::Upstream(message));
            }
            Some(message)
        }
        EnrichmentOutcome::NoMatch | EnrichmentOutcome::Enriched => None,
    };

    let song = app_state.songs.create(enrichment.song).await.map_err(|e| {
        error!(error = %e, "Error saving song");
        ServerError::Internal("Failed to save song".to_string())
    })?;

    // Saved without lyrics; still report the scrape failure
    if let Some(message) = fetch_error {
        warn!(id = %song.id, "Saved song without lyrics");
        let body = serde_json::json!({ "error": message, "song": song });
        return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response());
    }

    info!(id = %song.id, "Successfully saved song");
    Ok(Json(song).into_response())
}

/// GET /songs
/// List songs with optional exact filters and pagination
pub async fn list_songs(
    State(app_state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<Song>>> {
    let filter = SongFilter::new(
        query.first("group").map(str::to_string),
        query.first("song").map(str::to_string),
    );
    let pagination = Pagination::from_query(query.first("page"), query.first("limit"));

    let songs = app_state
        .songs
        .find(&filter, pagination.offset(), pagination.limit())
        .await
        .map_err(|e| {
            error!(error = %e, "Error listing songs");
            ServerError::Internal("Failed to retrieve songs".to_string())
        })?;

    Ok(Json(songs))
}

/// GET /songs/:id/text
/// Song lyrics split into verses, optionally paginated
pub async fn get_song_text(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<String>>> {
    let song = app_state
        .songs
        .get(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    let page = VersePage::from_query(query.first("page"), query.first("limit"));

    Ok(Json(paginate_verses(&song.text, page)))
}

/// DELETE /songs/:id
/// Soft-delete a song
pub async fn delete_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
) -> Result<(StatusCode, &'static str)> {
    app_state.songs.soft_delete(id).await.map_err(|e| match e {
        VerseError::SongNotFound(_) => ServerError::NotFound("Song not found".to_string()),
        other => {
            error!(id = %id, error = %other, "Error deleting song");
            ServerError::Internal("Failed to delete song".to_string())
        }
    })?;

    info!(id = %id, "Song deleted");
    Ok((StatusCode::OK, "Song deleted successfully"))
}

/// PUT /songs/:id
/// Overwrite the fields present in the body
pub async fn update_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Song>> {
    let mut song = app_state
        .songs
        .get(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    let patch: SongPatch = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Error decoding song update");
        ServerError::BadRequest("Invalid input".to_string())
    })?;

    song.apply(patch);

    let song = app_state.songs.save(&song).await.map_err(|e| match e {
        VerseError::SongNotFound(_) => ServerError::NotFound("Song not found".to_string()),
        other => {
            error!(id = %id, error = %other, "Error updating song");
            ServerError::Internal("Failed to update song".to_string())
        }
    })?;

    Ok(Json(song))
}
