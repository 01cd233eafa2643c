//! Note Form Component
//!
//! Form for creating a note with field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::TagSelector;
use crate::models::{Note, NoteTag};
use crate::query::{create_and_refresh, use_query_client};
use crate::validation::{validate, FormErrors, NoteDraft, CONTENT_MAX, TITLE_MAX};

/// Note creation form; `on_created` runs after the notes list was refreshed
#[component]
pub fn NoteForm(
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_created: Callback<Note>,
) -> impl IntoView {
    let client = use_query_client();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (tag, set_tag) = signal(NoteTag::default().as_str().to_string());
    let (errors, set_errors) = signal(FormErrors::default());
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let submitting = RwSignal::new(false);

    let create_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = NoteDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            tag: tag.get_untracked(),
        };
        let new_note = match validate(&draft) {
            Ok(note) => note,
            Err(found) => {
                set_errors.set(found);
                return;
            }
        };

        set_errors.set(FormErrors::default());
        set_server_error.set(None);
        submitting.set(true);
        let cache = client.cache();
        let service = client.service();
        spawn_local(async move {
            let result = create_and_refresh(&cache, &*service, &new_note).await;
            submitting.set(false);
            match result {
                Ok(note) => on_created.run(note),
                Err(err) => set_server_error.set(Some(err.to_string())),
            }
        });
    };

    let field_error = move |pick: fn(&FormErrors) -> Option<String>| {
        move || errors.with(pick).map(|message| view! { <span class="form-error">{message}</span> })
    };

    view! {
        <form class="note-form" on:submit=create_note>
            <div class="form-group">
                <label for="note-title">"Title"</label>
                <input
                    id="note-title"
                    type="text"
                    maxlength=TITLE_MAX.to_string()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {field_error(|e| e.title.clone())}
            </div>

            <div class="form-group">
                <label for="note-content">"Content"</label>
                <textarea
                    id="note-content"
                    rows="8"
                    maxlength=CONTENT_MAX.to_string()
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        let textarea = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok());
                        if let Some(textarea) = textarea {
                            set_content.set(textarea.value());
                        }
                    }
                ></textarea>
                {field_error(|e| e.content.clone())}
            </div>

            <div class="form-group">
                <span class="form-label">"Tag"</span>
                <TagSelector current_tag=tag on_change=move |value: String| set_tag.set(value) />
                {field_error(|e| e.tag.clone())}
            </div>

            {move || server_error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <div class="form-actions">
                <button type="button" class="cancel-button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="submit-button" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create note" }}
                </button>
            </div>
        </form>
    }
}
