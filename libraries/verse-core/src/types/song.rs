/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Creation, update and soft-deletion timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    /// Insert time
    pub created_at: DateTime<Utc>,
    /// Last write time
    pub updated_at: DateTime<Utc>,
    /// Set once the record is soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// Timestamps for a record created at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Whether the record has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Timestamps, serialized inline
    #[serde(flatten)]
    pub audit: AuditFields,

    /// Group or artist name
    pub group: String,

    /// Song title
    pub song: String,

    /// Free-text release date, never validated
    pub release_date: String,

    /// Full lyrics, verses separated by newlines
    pub text: String,

    /// Source link
    pub link: String,
}

impl Song {
    /// Overwrite every field present in `patch`
    ///
    /// The id and audit timestamps are never touched.
    pub fn apply(&mut self, patch: SongPatch) {
        let SongPatch {
            group,
            song,
            release_date,
            text,
            link,
        } = patch;

        if let Some(group) = group {
            self.group = group;
        }
        if let Some(song) = song {
            self.song = song;
        }
        if let Some(release_date) = release_date {
            self.release_date = release_date;
        }
        if let Some(text) = text {
            self.text = text;
        }
        if let Some(link) = link {
            self.link = link;
        }
    }
}

/// Data for creating a new song
///
/// Every field defaults to the empty string when missing from the request or
/// sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSong {
    /// Group or artist name
    #[serde(deserialize_with = "null_as_empty")]
    pub group: String,
    /// Song title
    #[serde(deserialize_with = "null_as_empty")]
    pub song: String,
    /// Free-text release date
    #[serde(deserialize_with = "null_as_empty")]
    pub release_date: String,
    /// Full lyrics
    #[serde(deserialize_with = "null_as_empty")]
    pub text: String,
    /// Source link
    #[serde(deserialize_with = "null_as_empty")]
    pub link: String,
}

impl NewSong {
    /// Create a song with just group and title set
    pub fn new(group: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            song: song.into(),
            ..Self::default()
        }
    }
}

/// Data for updating a song (all fields optional)
///
/// Absent and `null` fields keep their stored value; present fields, empty
/// strings included, overwrite it. Unknown keys such as `id` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPatch {
    /// New group or artist name
    pub group: Option<String>,
    /// New song title
    pub song: Option<String>,
    /// New release date
    pub release_date: Option<String>,
    /// New lyrics
    pub text: Option<String>,
    /// New source link
    pub link: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
