//! Search Box Component
//!
//! Controlled search input; debouncing happens in the parent.

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="text"
            placeholder="Search notes"
            autocomplete="off"
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
