//! Query Cache
//!
//! Request-state cache for single-threaded UIs. Entries are keyed by a
//! composite query key, track pending/success/error state, and share one
//! in-flight request between every caller asking for the same key.
//!
//! The cache holds at most a fixed number of entries; when full, the least
//! recently used entry with no request in flight is dropped.
//!
//! The cache is a cheap handle (`Rc`) meant to be created once and handed to
//! consumers explicitly, so tests can build their own.

mod entry;
mod observer;

pub use entry::{EntrySnapshot, QueryStatus};
pub use observer::{Observation, QueryObserver, QueryResult};

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use futures::future::{self, FutureExt, LocalBoxFuture};

use entry::Entry;

/// Key identifying one cacheable result set.
///
/// Keys sharing a namespace are invalidated together.
pub trait QueryKey: Clone + Eq + Hash + Debug + 'static {
    fn namespace(&self) -> &str;
}

/// Entries kept by [`QueryCache::new`]
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Handle returned by [`QueryCache::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn()>;

struct CacheInner<K, V, E> {
    entries: HashMap<K, Entry<V, E>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    max_entries: usize,
    clock: Cell<u64>,
}

impl<K, V, E> CacheInner<K, V, E> {
    fn listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| l.clone()).collect()
    }

    fn touch(&self, entry: &Entry<V, E>) {
        let now = self.clock.get() + 1;
        self.clock.set(now);
        entry.last_used.set(now);
    }
}

impl<K, V, E> CacheInner<K, V, E>
where
    K: QueryKey,
    V: Clone,
    E: Clone,
{
    /// Drop least recently used idle entries until within `max_entries`.
    /// `keep` is never dropped.
    fn evict(&mut self, keep: &K) {
        while self.entries.len() > self.max_entries {
            let victim = self
                .entries
                .iter()
                .filter(|(key, entry)| *key != keep && !entry.is_fetching())
                .min_by_key(|(_, entry)| entry.last_used.get())
                .map(|(key, _)| key.clone());
            let Some(victim) = victim else {
                break;
            };
            log::trace!("[QUERY] evicting {:?}", victim);
            self.entries.remove(&victim);
        }
    }
}

fn notify(listeners: Vec<Listener>) {
    for listener in listeners {
        listener();
    }
}

/// Shared request-state cache
pub struct QueryCache<K, V, E> {
    inner: Rc<RefCell<CacheInner<K, V, E>>>,
}

impl<K, V, E> Clone for QueryCache<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V, E> Default for QueryCache<K, V, E>
where
    K: QueryKey,
    V: Clone + 'static,
    E: Clone + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: QueryKey,
    V: Clone + 'static,
    E: Clone + Debug + 'static,
{
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Cache holding at most `max_entries` keys (at least one).
    /// Entries with a request in flight are kept even past the limit.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CacheInner {
                entries: HashMap::new(),
                listeners: Vec::new(),
                next_subscription: 0,
                max_entries: max_entries.max(1),
                clock: Cell::new(0),
            })),
        }
    }

    /// Current state of `key`; `Pending` if the key was never requested.
    pub fn snapshot(&self, key: &K) -> EntrySnapshot<V, E> {
        let inner = self.inner.borrow();
        match inner.entries.get(key) {
            Some(entry) => {
                inner.touch(entry);
                entry.snapshot()
            }
            None => EntrySnapshot::pending(),
        }
    }

    pub fn is_fetching(&self, key: &K) -> bool {
        self.inner
            .borrow()
            .entries
            .get(key)
            .is_some_and(Entry::is_fetching)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve `key`.
    ///
    /// Fresh cached data is returned without calling `fetcher`. If a request
    /// for the key is already in flight the returned future joins it.
    /// Otherwise `fetcher` is called once and its result is written to the
    /// entry when it settles, unless the entry was invalidated or refetched
    /// in the meantime.
    ///
    /// The returned future drives the request and must be polled.
    pub fn fetch<F, Fut>(&self, key: K, fetcher: F) -> LocalBoxFuture<'static, Result<V, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        {
            let inner = self.inner.borrow();
            if let Some(entry) = inner.entries.get(&key) {
                inner.touch(entry);
                if let Some(data) = entry.fresh_data() {
                    log::trace!("[QUERY] cache hit {:?}", key);
                    return future::ready(Ok(data.clone())).boxed_local();
                }
                if let Some(pending) = &entry.in_flight {
                    log::trace!("[QUERY] joining in-flight request {:?}", key);
                    return pending.clone().boxed_local();
                }
            }
        }

        let request = fetcher();

        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        let entry = inner.entries.entry(key.clone()).or_insert_with(Entry::new);
        entry.generation += 1;
        let generation = entry.generation;
        log::debug!("[QUERY] fetching {:?} (generation {})", key, generation);

        let weak = Rc::downgrade(&self.inner);
        let settled_key = key.clone();
        let shared = async move {
            let result = request.await;
            Self::settle(&weak, &settled_key, generation, &result);
            result
        }
        .boxed_local()
        .shared();
        entry.in_flight = Some(shared.clone());

        let now = inner.clock.get() + 1;
        inner.clock.set(now);
        entry.last_used.set(now);
        inner.evict(&key);

        shared.boxed_local()
    }

    fn settle(
        weak: &Weak<RefCell<CacheInner<K, V, E>>>,
        key: &K,
        generation: u64,
        result: &Result<V, E>,
    ) {
        let Some(inner) = weak.upgrade() else {
            log::debug!("[QUERY] cache dropped, discarding result for {:?}", key);
            return;
        };

        let listeners = {
            let mut inner = inner.borrow_mut();
            match inner.entries.get_mut(key) {
                Some(entry) if entry.generation == generation => {
                    entry.in_flight = None;
                    match result {
                        Ok(value) => {
                            entry.data = Some(value.clone());
                            entry.error = None;
                            entry.stale = false;
                        }
                        Err(err) => {
                            log::warn!("[QUERY] fetch failed for {:?}: {:?}", key, err);
                            entry.error = Some(err.clone());
                        }
                    }
                }
                _ => {
                    log::debug!("[QUERY] ignoring superseded result for {:?}", key);
                    return;
                }
            }
            inner.listeners()
        };

        notify(listeners);
    }

    /// Store `value` for `key` as fresh data, superseding any in-flight request.
    pub fn set_data(&self, key: K, value: V) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            let entry = inner.entries.entry(key.clone()).or_insert_with(Entry::new);
            entry.generation += 1;
            entry.in_flight = None;
            entry.data = Some(value);
            entry.error = None;
            entry.stale = false;
            if let Some(entry) = inner.entries.get(&key) {
                inner.touch(entry);
            }
            inner.evict(&key);
            inner.listeners()
        };
        notify(listeners);
    }

    /// Mark every entry in `namespace` stale. Returns how many were affected.
    ///
    /// Cached data stays readable until the refetch replaces it; in-flight
    /// requests for those entries no longer write their result.
    pub fn invalidate(&self, namespace: &str) -> usize {
        let (count, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let mut count = 0;
            for (key, entry) in inner.entries.iter_mut() {
                if key.namespace() == namespace {
                    entry.invalidate();
                    count += 1;
                }
            }
            (count, inner.listeners())
        };

        log::debug!("[QUERY] invalidated {} entries in '{}'", count, namespace);
        if count > 0 {
            notify(listeners);
        }
        count
    }

    /// Mark a single entry stale. Returns false if the key is unknown.
    pub fn invalidate_key(&self, key: &K) -> bool {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            match inner.entries.get_mut(key) {
                Some(entry) => entry.invalidate(),
                None => return false,
            }
            inner.listeners()
        };
        notify(listeners);
        true
    }

    pub fn remove(&self, key: &K) -> bool {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.entries.remove(key).is_none() {
                return false;
            }
            inner.listeners()
        };
        notify(listeners);
        true
    }

    pub fn clear(&self) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.entries.clear();
            inner.listeners()
        };
        notify(listeners);
    }

    /// Register a callback run after any entry changes.
    ///
    /// Listeners run with no borrow of the cache held, so they may read it.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}
