//! Query Observer
//!
//! One consumer's view of the cache: decides when a key needs a request and
//! keeps the previous key's data visible while the next key loads.

use std::fmt::Debug;
use std::future::Future;

use futures::future::LocalBoxFuture;

use crate::{QueryCache, QueryKey, QueryStatus};

/// What a consumer renders from
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<V, E> {
    pub status: QueryStatus,
    pub data: Option<V>,
    pub error: Option<E>,
    pub is_fetching: bool,
    /// `data` belongs to a previously observed key
    pub is_placeholder: bool,
}

impl<V, E> QueryResult<V, E> {
    /// First load with nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

impl<V, E> Default for QueryResult<V, E> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            is_fetching: false,
            is_placeholder: false,
        }
    }
}

/// Result of [`QueryObserver::observe`]
pub struct Observation<V, E> {
    pub result: QueryResult<V, E>,
    /// Request started by this observation; the caller must drive it.
    pub request: Option<LocalBoxFuture<'static, Result<V, E>>>,
}

pub struct QueryObserver<K, V, E> {
    cache: QueryCache<K, V, E>,
    keep_previous_data: bool,
    previous: Option<V>,
    last_key: Option<K>,
}

impl<K, V, E> QueryObserver<K, V, E>
where
    K: QueryKey,
    V: Clone + 'static,
    E: Clone + Debug + 'static,
{
    pub fn new(cache: QueryCache<K, V, E>, keep_previous_data: bool) -> Self {
        Self {
            cache,
            keep_previous_data,
            previous: None,
            last_key: None,
        }
    }

    /// Observe `key`, starting a request with `fetcher` when needed.
    ///
    /// A request is started when the key has never been fetched or is stale.
    /// A failed key is only retried when the observer moves onto it from a
    /// different key, never by re-observing it in place.
    pub fn observe<F, Fut>(&mut self, key: &K, fetcher: F) -> Observation<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        let key_changed = self.last_key.as_ref() != Some(key);
        if key_changed {
            self.last_key = Some(key.clone());
        }

        let current = self.cache.snapshot(key);
        let needs_request = !current.is_fetching
            && match current.status {
                QueryStatus::Pending => true,
                QueryStatus::Success => current.is_stale,
                QueryStatus::Error => key_changed || current.is_stale,
            };

        let request = needs_request.then(|| self.cache.fetch(key.clone(), fetcher));

        Observation {
            result: self.result_for(key),
            request,
        }
    }

    /// Current result for `key` without starting any request
    pub fn result_for(&mut self, key: &K) -> QueryResult<V, E> {
        let snapshot = self.cache.snapshot(key);

        if snapshot.status == QueryStatus::Success {
            self.previous = snapshot.data.clone();
        }

        if snapshot.status == QueryStatus::Pending && self.keep_previous_data {
            if let Some(previous) = &self.previous {
                return QueryResult {
                    status: QueryStatus::Success,
                    data: Some(previous.clone()),
                    error: None,
                    is_fetching: snapshot.is_fetching,
                    is_placeholder: true,
                };
            }
        }

        QueryResult {
            status: snapshot.status,
            data: snapshot.data,
            error: snapshot.error,
            is_fetching: snapshot.is_fetching,
            is_placeholder: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{notes, TestKey};
    use futures::executor::block_on;
    use futures::future;
    use std::cell::Cell;
    use std::rc::Rc;

    type Observer = QueryObserver<TestKey, String, String>;

    fn ok(value: &str) -> impl FnOnce() -> future::Ready<Result<String, String>> {
        let value = value.to_string();
        move || future::ready(Ok(value))
    }

    fn drive(observation: Observation<String, String>) -> QueryResult<String, String> {
        if let Some(request) = observation.request {
            let _ = block_on(request);
        }
        observation.result
    }

    #[test]
    fn test_first_observation_is_loading() {
        let mut observer = Observer::new(QueryCache::new(), true);
        let observation = observer.observe(&notes(1), ok("one"));

        assert!(observation.request.is_some());
        assert!(observation.result.is_loading());
        assert!(observation.result.is_fetching);
    }

    #[test]
    fn test_keeps_previous_data_while_next_key_loads() {
        let mut observer = Observer::new(QueryCache::new(), true);
        drive(observer.observe(&notes(1), ok("one")));
        assert_eq!(observer.result_for(&notes(1)).data.as_deref(), Some("one"));

        let observation = observer.observe(&notes(2), ok("two"));
        assert_eq!(observation.result.status, QueryStatus::Success);
        assert_eq!(observation.result.data.as_deref(), Some("one"));
        assert!(observation.result.is_placeholder);

        drive(observation);
        let settled = observer.result_for(&notes(2));
        assert_eq!(settled.data.as_deref(), Some("two"));
        assert!(!settled.is_placeholder);
    }

    #[test]
    fn test_without_keep_previous_next_key_is_pending() {
        let mut observer = Observer::new(QueryCache::new(), false);
        drive(observer.observe(&notes(1), ok("one")));

        let observation = observer.observe(&notes(2), ok("two"));
        assert!(observation.result.is_loading());
        assert!(observation.result.data.is_none());
    }

    #[test]
    fn test_fresh_key_does_not_request_again() {
        let mut observer = Observer::new(QueryCache::new(), true);
        drive(observer.observe(&notes(1), ok("one")));

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let observation = observer.observe(&notes(1), move || {
            counter.set(counter.get() + 1);
            future::ready(Ok("again".to_string()))
        });
        assert!(observation.request.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failed_key_retried_only_on_revisit() {
        let mut observer = Observer::new(QueryCache::new(), true);
        let failed = drive(observer.observe(&notes(1), || future::ready(Err("down".to_string()))));
        assert!(failed.is_fetching);

        let again = observer.observe(&notes(1), ok("never"));
        assert!(again.request.is_none());
        assert!(again.result.is_error());
        assert_eq!(again.result.error.as_deref(), Some("down"));

        drive(observer.observe(&notes(2), ok("two")));
        let revisit = observer.observe(&notes(1), ok("back"));
        assert!(revisit.request.is_some());
        drive(revisit);
        assert_eq!(observer.result_for(&notes(1)).data.as_deref(), Some("back"));
    }

    #[test]
    fn test_invalidation_triggers_request_but_keeps_data() {
        let cache = QueryCache::new();
        let mut observer = Observer::new(cache.clone(), true);
        drive(observer.observe(&notes(1), ok("before")));

        cache.invalidate("notes");
        let observation = observer.observe(&notes(1), ok("after"));
        assert!(observation.request.is_some());
        assert_eq!(observation.result.data.as_deref(), Some("before"));
        assert!(!observation.result.is_placeholder);

        drive(observation);
        assert_eq!(observer.result_for(&notes(1)).data.as_deref(), Some("after"));
    }
}
