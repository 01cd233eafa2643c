//! Cache Entry
//!
//! Per-key request state held by the cache.

use std::cell::Cell;

use futures::future::{LocalBoxFuture, Shared};

pub(crate) type SharedFetch<V, E> = Shared<LocalBoxFuture<'static, Result<V, E>>>;

/// Status of the most recent attempt for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data and no error yet
    Pending,
    /// Data is available
    Success,
    /// The last fetch failed
    Error,
}

/// Read-only view of one cache entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot<V, E> {
    pub status: QueryStatus,
    pub data: Option<V>,
    pub error: Option<E>,
    pub is_fetching: bool,
    pub is_stale: bool,
}

impl<V, E> EntrySnapshot<V, E> {
    pub fn pending() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            is_fetching: false,
            is_stale: false,
        }
    }
}

pub(crate) struct Entry<V, E> {
    pub data: Option<V>,
    pub error: Option<E>,
    pub stale: bool,
    /// Bumped on every new request and every invalidation; a settling
    /// request only writes if its generation is still current.
    pub generation: u64,
    pub in_flight: Option<SharedFetch<V, E>>,
    /// Cache clock value at the last read or write
    pub last_used: Cell<u64>,
}

impl<V: Clone, E: Clone> Entry<V, E> {
    pub fn new() -> Self {
        Self {
            data: None,
            error: None,
            stale: false,
            generation: 0,
            in_flight: None,
            last_used: Cell::new(0),
        }
    }

    pub fn status(&self) -> QueryStatus {
        if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Pending
        }
    }

    /// Data that can be served without a request
    pub fn fresh_data(&self) -> Option<&V> {
        if self.stale || self.error.is_some() {
            return None;
        }
        self.data.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Mark stale and abandon the in-flight request
    pub fn invalidate(&mut self) {
        self.stale = true;
        self.generation += 1;
        self.in_flight = None;
    }

    pub fn snapshot(&self) -> EntrySnapshot<V, E> {
        EntrySnapshot {
            status: self.status(),
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.is_fetching(),
            is_stale: self.stale,
        }
    }
}
