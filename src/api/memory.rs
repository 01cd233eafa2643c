//! In-memory `NoteService` for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, NoteService};
use crate::models::{NewNote, Note, NotesPage, NotesQuery};

#[derive(Default)]
pub struct MemoryNoteService {
    notes: RefCell<Vec<Note>>,
    next_id: Cell<u32>,
    list_calls: Cell<u32>,
    fail_next: RefCell<Option<ApiError>>,
}

impl MemoryNoteService {
    pub fn with_titles(titles: &[&str]) -> Self {
        let service = Self::default();
        for title in titles {
            service.insert(NewNote {
                title: title.to_string(),
                content: format!("{} content", title),
                ..Default::default()
            });
        }
        service
    }

    pub fn list_calls(&self) -> u32 {
        self.list_calls.get()
    }

    /// Make the next call of any kind fail with `err`
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn insert(&self, note: NewNote) -> Note {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let note = Note {
            id: id.to_string(),
            title: note.title,
            content: note.content,
            tag: note.tag,
            created_at: None,
            updated_at: None,
        };
        self.notes.borrow_mut().push(note.clone());
        note
    }
}

#[async_trait(?Send)]
impl NoteService for MemoryNoteService {
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.take_failure()?;

        let search = query.search.trim().to_lowercase();
        let matching: Vec<Note> = self
            .notes
            .borrow()
            .iter()
            .filter(|n| {
                search.is_empty()
                    || n.title.to_lowercase().contains(&search)
                    || n.content.to_lowercase().contains(&search)
            })
            .cloned()
            .collect();

        let per_page = query.per_page.max(1) as usize;
        let total_pages = matching.len().div_ceil(per_page).max(1) as u32;
        let notes = matching
            .into_iter()
            .skip((query.page.max(1) as usize - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(NotesPage { notes, total_pages })
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, ApiError> {
        self.take_failure()?;
        Ok(self.insert(note.clone()))
    }

    async fn delete_note(&self, id: &str) -> Result<Note, ApiError> {
        self.take_failure()?;
        let mut notes = self.notes.borrow_mut();
        let index = notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| ApiError::Server {
                status: 404,
                message: Some("Note not found".to_string()),
            })?;
        Ok(notes.remove(index))
    }
}
