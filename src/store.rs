//! UI State Store
//!
//! Transient state owned by the root component, using Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::NotesQuery;

/// Transient UI state; never persisted
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Current page, 1-based
    pub page: u32,
    pub per_page: u32,
    /// Search box contents, updated on every keystroke
    pub search_input: String,
    /// Search applied to the list after the debounce delay
    pub search_term: String,
    pub modal_open: bool,
}

impl UiState {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

// ========================
// Store Helper Functions
// ========================

/// Build the list query the current state asks for
pub fn store_notes_query(store: &UiStore) -> NotesQuery {
    NotesQuery::new(
        store.page().get(),
        store.per_page().get(),
        store.search_term().get(),
    )
}

pub fn store_set_page(store: &UiStore, page: u32, total_pages: u32) {
    store.page().set(clamp_page(page, total_pages));
}

/// Pull the current page back into range after the total shrank.
/// Returns true if the page moved.
pub fn store_fit_page(store: &UiStore, total_pages: u32) -> bool {
    let page = store.page().get_untracked();
    let fitted = clamp_page(page, total_pages);
    if fitted == page {
        return false;
    }
    log::debug!("[STORE] page {} out of range, moving to {}", page, fitted);
    store.page().set(fitted);
    true
}

/// Apply a settled search term; a new term starts again from page 1
pub fn store_commit_search(store: &UiStore, term: String) {
    let term = term.trim().to_string();
    if store.search_term().get_untracked() == term {
        return;
    }
    log::debug!("[STORE] search '{}'", term);
    store.search_term().set(term);
    store.page().set(1);
}

pub fn store_set_modal_open(store: &UiStore, open: bool) {
    store.modal_open().set(open);
}
