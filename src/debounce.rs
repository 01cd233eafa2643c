//! Debounced Values
//!
//! A value typed in quick succession is only committed once input pauses.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pending-value state machine behind [`use_debounce`].
///
/// Each input supersedes the previous one and returns a ticket; only the
/// ticket of the latest input can settle.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<T>,
    ticket: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            ticket: 0,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, value: T) -> u64 {
        self.ticket += 1;
        self.pending = Some(value);
        self.ticket
    }

    /// Take the pending value if `ticket` is still the latest input
    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.ticket {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.ticket += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Run `on_settle` with `source`'s value once it has been unchanged for `delay_ms`
pub fn use_debounce<T>(source: Signal<T>, delay_ms: u32, on_settle: Callback<T>)
where
    T: Clone + Send + Sync + 'static,
{
    let debouncer = StoredValue::new_local(Debouncer::new());
    on_cleanup(move || {
        debouncer.try_update_value(Debouncer::cancel);
    });

    Effect::new(move |_| {
        let value = source.get();
        let Some(ticket) = debouncer.try_update_value(|d| d.input(value)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(settled) = debouncer.try_update_value(|d| d.settle(ticket)).flatten() {
                on_settle.run(settled);
            }
        });
    });
}
