//! Notes API
//!
//! Client for the remote notes service, organized by concern.

mod error;
mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::{NewNote, Note, NotesPage, NotesQuery};

pub use error::ApiError;
pub use http::HttpNoteService;

/// Remote notes operations. Implementations do no caching and no retries.
#[async_trait(?Send)]
pub trait NoteService {
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, ApiError>;

    async fn create_note(&self, note: &NewNote) -> Result<Note, ApiError>;

    /// Returns the deleted note
    async fn delete_note(&self, id: &str) -> Result<Note, ApiError>;
}
