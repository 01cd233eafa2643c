//! Status Placeholders
//!
//! Loading, error and empty states for the notes list, and the rule that
//! picks exactly one of them (or the list itself).

use leptos::prelude::*;

use crate::api::ApiError;
use crate::models::Note;
use crate::query::NotesResult;

pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const EMPTY_MESSAGE: &str = "No notes found.";

/// What the notes area shows
#[derive(Debug, Clone, PartialEq)]
pub enum NotesView {
    Loading,
    Error(String),
    Empty,
    List(Vec<Note>),
}

/// Message for a failed fetch
pub fn error_message(error: Option<&ApiError>) -> String {
    error
        .map(ApiError::to_string)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

pub fn notes_view(result: &NotesResult) -> NotesView {
    if result.is_loading() {
        return NotesView::Loading;
    }
    match &result.data {
        Some(page) if !result.is_error() => {
            if page.notes.is_empty() {
                NotesView::Empty
            } else {
                NotesView::List(page.notes.clone())
            }
        }
        _ => NotesView::Error(error_message(result.error.as_ref())),
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! { <p class="loading">"Loading notes..."</p> }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="error">{message}</p> }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="empty">{message}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteTag, NotesPage};
    use query_cache::QueryStatus;

    fn with_page(notes: Vec<Note>, total_pages: u32) -> NotesResult {
        NotesResult {
            status: QueryStatus::Success,
            data: Some(NotesPage { notes, total_pages }),
            ..Default::default()
        }
    }

    fn failed(error: ApiError) -> NotesResult {
        NotesResult {
            status: QueryStatus::Error,
            error: Some(error),
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_is_loading() {
        assert_eq!(notes_view(&NotesResult::default()), NotesView::Loading);
    }

    #[test]
    fn test_empty_result_shows_empty_state() {
        assert_eq!(notes_view(&with_page(vec![], 1)), NotesView::Empty);
    }

    #[test]
    fn test_notes_are_listed() {
        let note = Note {
            id: "1".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            tag: NoteTag::Work,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            notes_view(&with_page(vec![note.clone()], 1)),
            NotesView::List(vec![note])
        );
    }

    #[test]
    fn test_error_uses_failure_message() {
        let result = failed(ApiError::Server {
            status: 401,
            message: Some("Invalid token".to_string()),
        });
        assert_eq!(notes_view(&result), NotesView::Error("Invalid token".to_string()));
    }

    #[test]
    fn test_error_without_message_is_unknown() {
        let result = failed(ApiError::Unknown(String::new()));
        assert_eq!(notes_view(&result), NotesView::Error(UNKNOWN_ERROR.to_string()));
        assert_eq!(error_message(None), UNKNOWN_ERROR);
    }

    #[test]
    fn test_error_wins_over_stale_data() {
        let mut result = with_page(vec![], 1);
        result.status = QueryStatus::Error;
        result.error = Some(ApiError::Network("offline".to_string()));
        assert_eq!(
            notes_view(&result),
            NotesView::Error("Network error: offline".to_string())
        );
    }

    #[test]
    fn test_background_refetch_does_not_change_view() {
        let note = Note {
            id: "1".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            tag: NoteTag::Todo,
            created_at: None,
            updated_at: None,
        };
        let settled = with_page(vec![note], 1);
        let mut refetching = settled.clone();
        refetching.is_fetching = true;
        refetching.is_placeholder = true;

        assert_eq!(notes_view(&settled), notes_view(&refetching));
    }
}
