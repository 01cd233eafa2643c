//! UI Components
//!
//! Presentation components for the notes page.

mod delete_confirm_button;
mod modal;
mod note_form;
mod note_list;
mod pagination;
mod search_box;
mod status;
mod tag_selector;

pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::Modal;
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use status::{notes_view, EmptyState, ErrorMessage, LoadingIndicator, NotesView, EMPTY_MESSAGE};
pub use tag_selector::TagSelector;
