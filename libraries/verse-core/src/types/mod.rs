//! Domain types for the song catalog

mod ids;
mod lyrics;
mod query;
mod song;

pub use ids::SongId;
pub use lyrics::{LyricsPage, SearchHit};
pub use query::{paginate_verses, Pagination, SongFilter, VersePage, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use song::{AuditFields, NewSong, Song, SongPatch};
