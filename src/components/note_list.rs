//! Note List Component
//!
//! One row per note with an inline-confirmed delete action.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Note;

/// Renders `notes`; `deleting` disables every delete control
#[component]
pub fn NoteList(
    notes: Vec<Note>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="note-list">
            {notes
                .into_iter()
                .map(|note| view! { <NoteRow note=note deleting=deleting on_delete=on_delete /> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn NoteRow(note: Note, deleting: Signal<bool>, on_delete: Callback<String>) -> impl IntoView {
    let id = note.id.clone();
    let created = note
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string());

    view! {
        <li class="note-item">
            <h2 class="note-title">{note.title}</h2>
            <p class="note-content">{note.content}</p>
            <div class="note-footer">
                <span class="note-tag">{note.tag.as_str()}</span>
                {created.map(|at| view! { <time class="note-date">{at}</time> })}
                <DeleteConfirmButton
                    button_class="note-delete-btn"
                    disabled=deleting
                    on_confirm=Callback::new(move |_| on_delete.run(id.clone()))
                />
            </div>
        </li>
    }
}
