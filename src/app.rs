//! NoteHub Frontend App
//!
//! Root component: owns the transient UI state, debounces search and wires
//! the notes query and mutations into the presentation components.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{HttpNoteService, NoteService};
use crate::components::{
    notes_view, EmptyState, ErrorMessage, LoadingIndicator, Modal, NoteForm, NoteList, NotesView,
    Pagination, SearchBox, EMPTY_MESSAGE,
};
use crate::config::AppConfig;
use crate::debounce::use_debounce;
use crate::models::Note;
use crate::query::{
    delete_and_refresh, provide_query_client, settled_total_pages, use_notes, NotesCache,
    QueryClient,
};
use crate::store::{
    store_commit_search, store_fit_page, store_notes_query, store_set_modal_open, store_set_page,
    UiState, UiStateStoreFields,
};

fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::error!("[APP] alert failed: {:?}", err);
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let service: Rc<dyn NoteService> = Rc::new(HttpNoteService::new(&config));
    let client = QueryClient::new(NotesCache::new(), service);
    provide_query_client(client);

    let store = Store::new(UiState::new(config.per_page));

    // Search box -> debounced search term
    use_debounce(
        Signal::derive(move || store.search_input().get()),
        config.search_debounce_ms,
        Callback::new(move |term: String| store_commit_search(&store, term)),
    );

    let query = Memo::new(move |_| store_notes_query(&store));
    let notes = use_notes(query.into());
    let total_pages = Memo::new(move |_| {
        notes.with(|result| result.data.as_ref().map_or(1, |page| page.total_pages))
    });

    // Deleting the last note of the last page shrinks the total
    Effect::new(move |_| {
        if let Some(total) = notes.with(settled_total_pages) {
            store_fit_page(&store, total);
        }
    });

    // Only a change in what is shown rebuilds the list
    let view_state = Memo::new(move |_| notes.with(notes_view));
    let refreshing = move || notes.with(|result| result.is_placeholder || result.is_fetching);

    let deleting = RwSignal::new(false);
    let on_delete = Callback::new(move |id: String| {
        deleting.set(true);
        let cache = client.cache();
        let service = client.service();
        spawn_local(async move {
            let result = delete_and_refresh(&cache, &*service, &id).await;
            deleting.set(false);
            if let Err(err) = result {
                alert(&format!("Failed to delete note: {}", err));
            }
        });
    });

    let close_modal = Callback::new(move |_| store_set_modal_open(&store, false));
    let on_created = Callback::new(move |note: Note| {
        log::info!("[APP] note '{}' created", note.title);
        store_set_modal_open(&store, false);
    });

    view! {
        <div class="app">
            <header class="toolbar">
                <SearchBox
                    value=Signal::derive(move || store.search_input().get())
                    on_change=Callback::new(move |value: String| store.search_input().set(value))
                />
                <Pagination
                    page=Signal::derive(move || store.page().get())
                    total_pages=total_pages
                    on_page_change=Callback::new(move |page: u32| {
                        store_set_page(&store, page, total_pages.get_untracked())
                    })
                />
                <button class="button" on:click=move |_| store_set_modal_open(&store, true)>
                    "Create note +"
                </button>
            </header>

            <main
                class="notes"
                class:refreshing=refreshing
                inert=move || store.modal_open().get()
            >
                {move || match view_state.get() {
                    NotesView::Loading => view! { <LoadingIndicator /> }.into_any(),
                    NotesView::Error(message) => view! { <ErrorMessage message=message /> }.into_any(),
                    NotesView::Empty => view! { <EmptyState message=EMPTY_MESSAGE /> }.into_any(),
                    NotesView::List(list) => view! {
                        <NoteList notes=list deleting=deleting on_delete=on_delete />
                    }.into_any(),
                }}
            </main>

            <Show when=move || store.modal_open().get()>
                <Modal on_close=close_modal>
                    <NoteForm on_cancel=close_modal on_created=on_created />
                </Modal>
            </Show>
        </div>
    }
}
