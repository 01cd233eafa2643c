//! Modal Component
//!
//! Overlay that closes on backdrop click or Escape and locks page scroll
//! while mounted.

use leptos::ev;
use leptos::prelude::*;

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::warn!("[MODAL] failed to set body overflow: {:?}", err);
    }
}

#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    set_body_scroll_locked(true);
    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        <div class="modal-backdrop" role="presentation" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
