/// API route modules
pub mod docs;
pub mod health;
pub mod songs;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn router(app_state: AppState) -> Router {
    let song_routes = Router::new()
        .route("/songs", post(songs::create_song).get(songs::list_songs))
        .route("/info", get(songs::list_songs))
        .route("/songs/:id/text", get(songs::get_song_text))
        .route(
            "/songs/:id",
            axum::routing::delete(songs::delete_song).put(songs::update_song),
        );

    Router::new()
        .route("/health", get(health::health))
        .merge(song_routes)
        .route("/swagger/doc.json", get(docs::openapi_document))
        // Any other path under /swagger gets the UI page
        .fallback(docs::fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
