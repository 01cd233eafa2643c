//! Notes Query Client
//!
//! Connects the request cache and the note service to Leptos: the client is
//! provided via context, `use_notes` keeps a signal in sync with the cache,
//! and mutations refresh the notes namespace when they succeed.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use query_cache::{QueryCache, QueryObserver, QueryResult};

use crate::api::{ApiError, NoteService};
use crate::models::{NewNote, Note, NotesPage, NotesQuery, NOTES_NAMESPACE};

pub type NotesCache = QueryCache<NotesQuery, NotesPage, ApiError>;
pub type NotesResult = QueryResult<NotesPage, ApiError>;

/// Cache and service handles shared by every component
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<NotesCache, LocalStorage>,
    service: StoredValue<Rc<dyn NoteService>, LocalStorage>,
}

impl QueryClient {
    pub fn new(cache: NotesCache, service: Rc<dyn NoteService>) -> Self {
        Self {
            cache: StoredValue::new_local(cache),
            service: StoredValue::new_local(service),
        }
    }

    pub fn cache(&self) -> NotesCache {
        self.cache.get_value()
    }

    /// `None` once the owning scope has been disposed
    pub fn try_cache(&self) -> Option<NotesCache> {
        self.cache.try_get_value()
    }

    pub fn service(&self) -> Rc<dyn NoteService> {
        self.service.get_value()
    }
}

pub fn provide_query_client(client: QueryClient) {
    provide_context(client);
}

/// Get the query client from context
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Track the notes list for `query`.
///
/// Refetches when the query changes or the cache invalidates it; while a new
/// query loads, the previous query's notes stay visible.
pub fn use_notes(query: Signal<NotesQuery>) -> ReadSignal<NotesResult> {
    let client = use_query_client();
    let cache = client.cache();
    let (result, set_result) = signal(NotesResult::default());
    let (revision, set_revision) = signal(0u64);

    let subscription = cache.subscribe(move || set_revision.update(|r| *r += 1));
    on_cleanup(move || {
        if let Some(cache) = client.try_cache() {
            cache.unsubscribe(subscription);
        }
    });

    let observer = StoredValue::new_local(QueryObserver::new(cache, true));

    Effect::new(move |_| {
        let _ = revision.get();
        let key = query.get();
        let service = client.service();
        let fetch_key = key.clone();

        let Some(observation) = observer.try_update_value(|observer| {
            observer.observe(&key, move || async move { service.list_notes(&fetch_key).await })
        }) else {
            return;
        };

        set_result.set(observation.result);
        if let Some(request) = observation.request {
            log::debug!("[QUERY] loading {:?}", key);
            spawn_local(async move {
                let _ = request.await;
            });
        }
    });

    result
}

/// Total pages reported by a settled, non-placeholder result
pub fn settled_total_pages(result: &NotesResult) -> Option<u32> {
    if result.is_fetching || result.is_placeholder {
        return None;
    }
    result.data.as_ref().map(|page| page.total_pages)
}

/// Create a note, then mark every cached notes list stale
pub async fn create_and_refresh(
    cache: &NotesCache,
    service: &dyn NoteService,
    note: &NewNote,
) -> Result<Note, ApiError> {
    let created = service.create_note(note).await?;
    log::info!("[QUERY] created note {}", created.id);
    cache.invalidate(NOTES_NAMESPACE);
    Ok(created)
}

/// Delete a note, then mark every cached notes list stale
pub async fn delete_and_refresh(
    cache: &NotesCache,
    service: &dyn NoteService,
    id: &str,
) -> Result<Note, ApiError> {
    let deleted = service.delete_note(id).await?;
    log::info!("[QUERY] deleted note {}", deleted.id);
    cache.invalidate(NOTES_NAMESPACE);
    Ok(deleted)
}
