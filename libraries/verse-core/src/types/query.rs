//! Listing filters and pagination
//!
//! Query-string values arrive as raw strings; anything that does not parse
//! to a positive integer falls back to the defaults instead of failing the
//! request.

use crate::types::Song;
use serde::{Deserialize, Serialize};

/// Page used when `page` is missing or invalid
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `limit` is missing or invalid
pub const DEFAULT_LIMIT: u32 = 10;

/// Exact-match filters for the song listing
///
/// Matching is case-sensitive; an empty value means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFilter {
    /// Required group name
    pub group: Option<String>,
    /// Required song title
    pub song: Option<String>,
}

impl SongFilter {
    /// Build a filter, treating empty values as absent
    pub fn new(group: Option<String>, song: Option<String>) -> Self {
        Self {
            group: group.filter(|g| !g.is_empty()),
            song: song.filter(|s| !s.is_empty()),
        }
    }

    /// Whether `song` passes every set filter
    pub fn matches(&self, song: &Song) -> bool {
        self.group.as_deref().map_or(true, |g| song.group == g)
            && self.song.as_deref().map_or(true, |s| song.song == s)
    }
}

/// Page/limit pair for the song listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build from raw query values, coercing invalid input to the defaults
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Page/limit pair for slicing lyric verses
///
/// Unlike [`Pagination`] there are no defaults: without both values the
/// whole text is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersePage {
    /// 1-based page number
    pub page: u32,
    /// Verses per page
    pub limit: u32,
}

impl VersePage {
    /// `Some` only when both values parse to positive integers
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Option<Self> {
        Some(Self {
            page: parse_positive(page)?,
            limit: parse_positive(limit)?,
        })
    }
}

/// Split `text` into verses on `\n` and cut out the requested page
///
/// The slice is clamped to the verse count, so a page past the end yields an
/// empty list rather than an error.
pub fn paginate_verses(text: &str, page: Option<VersePage>) -> Vec<String> {
    let verses: Vec<&str> = text.split('\n').collect();

    let Some(VersePage { page, limit }) = page else {
        return verses.into_iter().map(str::to_string).collect();
    };

    let start = (page as usize - 1)
        .saturating_mul(limit as usize)
        .min(verses.len());
    let end = start.saturating_add(limit as usize).min(verses.len());

    verses[start..end].iter().map(|v| (*v).to_string()).collect()
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.parse::<u32>().ok().filter(|n| *n >= 1)
}
