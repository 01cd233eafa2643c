//! Tag Selector Component
//!
//! Note tag selector buttons.

use leptos::prelude::*;

use crate::models::NoteTag;

/// Tag selector buttons for the note form
#[component]
pub fn TagSelector(
    current_tag: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="tag-selector" role="radiogroup">
            {NoteTag::ALL.iter().map(|tag| {
                let label = tag.as_str();
                let is_selected = move || current_tag.get() == label;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "tag-btn active" } else { "tag-btn" }
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| on_change(label.to_string())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
