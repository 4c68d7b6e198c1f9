//! Verse Server Library
//!
//! REST catalog of song lyrics, enriched from Genius on creation.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::EnrichmentService;
pub use state::AppState;
