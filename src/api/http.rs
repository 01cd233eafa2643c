//! HTTP Note Service
//!
//! `NoteService` over the notes REST API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, NoteService};
use crate::config::AppConfig;
use crate::models::{NewNote, Note, NotesPage, NotesQuery};

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct HttpNoteService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpNoteService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: server_error_message(&body),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Query string for a list request; an empty search is left out
pub fn list_params(query: &NotesQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("perPage", query.per_page.to_string()),
    ];
    let search = query.search.trim();
    if !search.is_empty() {
        params.push(("search", search.to_string()));
    }
    params
}

/// `message` from a JSON error body, if there is a non-empty one
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[async_trait(?Send)]
impl NoteService for HttpNoteService {
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, ApiError> {
        log::debug!("[API] GET notes {:?}", query);
        let builder = self.request(Method::GET, "notes").query(&list_params(query));
        Self::send(builder).await.inspect_err(|e| log::warn!("[API] list notes failed: {}", e))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, ApiError> {
        log::debug!("[API] POST notes '{}'", note.title);
        let builder = self.request(Method::POST, "notes").json(note);
        Self::send(builder).await.inspect_err(|e| log::warn!("[API] create note failed: {}", e))
    }

    async fn delete_note(&self, id: &str) -> Result<Note, ApiError> {
        log::debug!("[API] DELETE notes/{}", id);
        let builder = self.request(Method::DELETE, &format!("notes/{}", id));
        Self::send(builder).await.inspect_err(|e| log::warn!("[API] delete note {} failed: {}", id, e))
    }
}
