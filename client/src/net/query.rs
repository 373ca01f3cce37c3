//! Reactive queries and mutations over the shared [`QueryCache`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never fetch directly. A query names its request path and the tags it
//! provides; it re-runs whenever one of those tags is invalidated. A mutation
//! names the tags it invalidates and applies the invalidation once the API
//! confirms success, which is what refreshes every affected list.
//!
//! TRADE-OFFS
//! ==========
//! Fetching only happens in the browser. During SSR queries stay `Loading`,
//! which matches the state the hydrated client starts from.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::future::Future;

use leptos::prelude::*;
use serde_json::Value;
use wire::envelope::{decode_data, decode_list};
use wire::{ApiError, Envelope, Resource, Tag};

use super::cache::QueryCache;

/// Lifecycle of a query as seen by a page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> QueryState<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn from_result(result: Result<T, ApiError>) -> Self {
        result.map_or_else(Self::Failed, Self::Ready)
    }
}

/// Banner text for a non-ready query, `None` once data is available.
#[must_use]
pub fn status_message<T>(state: &QueryState<T>) -> Option<String> {
    match state {
        QueryState::Loading => Some("Loading...".to_owned()),
        QueryState::Ready(_) => None,
        QueryState::Failed(err) => Some(format!("Could not load data: {err}")),
    }
}

/// Decoder turning a cached `data` payload into a typed value.
pub type Decoder<T> = fn(Option<Value>) -> Result<T, ApiError>;

/// A refetch of the same key keeps showing its previous result; a new key
/// (another record on a detail route) starts from `Loading`.
fn shows_loading(previous: Option<&str>, path: &str, ready: bool) -> bool {
    !is_current_key(previous, path) || !ready
}

/// Whether a response for `path` still belongs to the query's current key.
fn is_current_key(current: Option<&str>, path: &str) -> bool {
    current == Some(path)
}

/// Run a cached GET.
///
/// `key` yields the request path, or `None` while a dependency (such as a
/// route parameter) is unavailable. `tags` are the tags this read provides.
pub fn use_query<T, K>(tags: Vec<Tag>, key: K, decode: Decoder<T>) -> RwSignal<QueryState<T>>
where
    T: Clone + Send + Sync + 'static,
    K: Fn() -> Option<String> + Send + Sync + 'static,
{
    let cache = expect_context::<RwSignal<QueryCache>>();
    let state = RwSignal::new(QueryState::Loading);
    let current = StoredValue::new(None::<String>);
    let revision_tags = tags.clone();
    let revision = Memo::new(move |_| cache.with(|c| c.revision(&revision_tags)));

    Effect::new(move || {
        let seen = revision.get();
        let Some(path) = key() else {
            return;
        };
        let previous = current.with_value(Clone::clone);
        current.set_value(Some(path.clone()));
        let cached = cache.with_untracked(|c| c.get(&path).map(|entry| entry.data.clone()));
        if let Some(data) = cached {
            state.set(QueryState::from_result(decode(data)));
            return;
        }
        if shows_loading(previous.as_deref(), &path, state.with_untracked(QueryState::is_ready)) {
            state.set(QueryState::Loading);
        }

        #[cfg(feature = "hydrate")]
        {
            let tags = tags.clone();
            leptos::task::spawn_local(async move {
                let result = super::http::get(&path).await;
                // The page may have unmounted, or an invalidation may have
                // already started a newer fetch.
                if revision.try_get_untracked() != Some(seen) {
                    return;
                }
                let still_current = current.try_with_value(|c| is_current_key(c.as_deref(), &path)) == Some(true);
                match result {
                    Ok(envelope) => {
                        let data = envelope.data;
                        cache.update(|c| {
                            c.insert_if_current(path, tags, data.clone(), seen);
                        });
                        if still_current {
                            let _ = state.try_set(QueryState::from_result(decode(data)));
                        }
                    }
                    Err(err) => {
                        log::warn!("query {path} failed: {err}");
                        if still_current {
                            let _ = state.try_set(QueryState::Failed(err));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seen;
        }
    });

    state
}

/// Query a resource's list route.
pub fn use_list<R: Resource>() -> RwSignal<QueryState<Vec<R::Item>>> {
    use_query(vec![R::TAG], || Some(R::LIST_PATH.to_owned()), decode_list::<R::Item>)
}

/// Query one record of a resource; `id` is re-read reactively.
pub fn use_detail<R, I>(id: I) -> RwSignal<QueryState<R::Item>>
where
    R: Resource,
    I: Fn() -> Option<String> + Send + Sync + 'static,
{
    use_query(vec![R::TAG], move || id().map(|id| R::detail_path(&id)), decode_data::<R::Item>)
}

/// Pending/error state for one kind of write issued from a page.
#[derive(Clone, Copy)]
pub struct Mutation {
    pub pending: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    cache: RwSignal<QueryCache>,
}

impl Mutation {
    /// Create mutation state bound to the cache in context.
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
            cache: expect_context::<RwSignal<QueryCache>>(),
        }
    }

    /// Issue `request`; on success invalidate `tags` and call `on_success`.
    ///
    /// Ignored while a previous request from the same mutation is pending.
    /// Failures are kept in [`Mutation::error`] and are never retried.
    pub fn run<Fut, S>(self, tags: Vec<Tag>, request: Fut, on_success: S)
    where
        Fut: Future<Output = Result<Envelope, ApiError>> + 'static,
        S: FnOnce(Envelope) + 'static,
    {
        if self.pending.get_untracked() {
            return;
        }
        self.pending.set(true);
        self.error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            let _ = self.pending.try_set(false);
            match result {
                Ok(envelope) => apply_success(self.cache, &tags, envelope, on_success),
                Err(err) => {
                    log::warn!("mutation failed: {err}");
                    let _ = self.error.try_set(Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tags, request, on_success);
            self.pending.set(false);
        }
    }

    /// Surface a client-side validation failure without sending anything.
    pub fn reject(self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    /// Clear a previous error, e.g. when a dialog is reopened.
    pub fn reset(self) {
        self.error.set(None);
    }
}

/// Finish a confirmed write: invalidate `tags`, then run `on_success`.
#[cfg(any(test, feature = "hydrate"))]
fn apply_success<S: FnOnce(Envelope)>(cache: RwSignal<QueryCache>, tags: &[Tag], envelope: Envelope, on_success: S) {
    cache.update(|c| {
        c.invalidate(tags);
    });
    on_success(envelope);
}

impl Default for Mutation {
    fn default() -> Self {
        Self::new()
    }
}
