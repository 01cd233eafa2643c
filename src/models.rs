//! Frontend Models
//!
//! Data structures matching the notes API.

use chrono::{DateTime, Utc};
use query_cache::QueryKey;
use serde::{Deserialize, Serialize};

/// Cache namespace shared by every notes list query
pub const NOTES_NAMESPACE: &str = "notes";

/// Note category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a note
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

/// One page of the notes list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

/// Parameters of a notes list request; also the cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotesQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

impl NotesQuery {
    /// Page is floored at 1 and the search is trimmed, so equivalent
    /// requests share a cache key.
    pub fn new(page: u32, per_page: u32, search: impl AsRef<str>) -> Self {
        Self {
            page: page.max(1),
            per_page,
            search: search.as_ref().trim().to_string(),
        }
    }
}

impl QueryKey for NotesQuery {
    fn namespace(&self) -> &str {
        NOTES_NAMESPACE
    }
}
