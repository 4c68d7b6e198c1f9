//! Verse Core
//!
//! Domain types, seam traits, and error handling shared by the Verse crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `AuditFields`, `NewSong`, `SongPatch`, query types
//! - **Core Traits**: `SongRepository` (persistence), `LyricsProvider` (enrichment)
//! - **Error Handling**: Unified `VerseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{NewSong, Pagination, SongPatch};
//!
//! let mut song = NewSong::new("Muse", "Supermassive Black Hole");
//! song.release_date = "16.07.2006".to_string();
//!
//! let page = Pagination::from_query(Some("2"), Some("abc"));
//! assert_eq!(page.offset(), 10);
//!
//! let patch: SongPatch = serde_json::from_str(r#"{"song": "Uprising"}"#).unwrap();
//! assert_eq!(patch.song.as_deref(), Some("Uprising"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use storage::SongRepository;
pub use traits::LyricsProvider;

pub use types::{
    paginate_verses, AuditFields, LyricsPage, NewSong, Pagination, SearchHit, Song, SongFilter,
    SongId, SongPatch, VersePage,
};
