//! Tag-keyed query cache.
//!
//! DESIGN
//! ======
//! Entries hold the raw `data` payload of a GET, keyed by request path and
//! labelled with the tags the read provides. A mutation invalidates tags:
//! matching entries are dropped and each tag's revision counter advances.
//! Queries watch the revision of their tags, so an invalidation is what makes
//! them refetch. There is no staleness window and no eviction.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use serde_json::Value;
use wire::Tag;

/// One cached GET payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry {
    pub data: Option<Value>,
    pub tags: Vec<Tag>,
}

/// Shared cache provided through Leptos context as `RwSignal<QueryCache>`.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
    revisions: HashMap<Tag, u64>,
    /// Advanced by `clear`, so reads started before it never store.
    generation: u64,
}

impl QueryCache {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Combined revision of `tags`; changes whenever any of them is invalidated.
    #[must_use]
    pub fn revision(&self, tags: &[Tag]) -> u64 {
        self.generation + tags.iter().map(|tag| self.revisions.get(tag).copied().unwrap_or(0)).sum::<u64>()
    }

    /// Store a payload fetched while the cache was at revision `seen`.
    ///
    /// Returns `false` and stores nothing if any of `tags` was invalidated
    /// while the request was in flight; the refetch triggered by that
    /// invalidation supersedes this payload.
    pub fn insert_if_current(&mut self, key: String, tags: Vec<Tag>, data: Option<Value>, seen: u64) -> bool {
        if self.revision(&tags) != seen {
            return false;
        }
        self.entries.insert(key, CacheEntry { data, tags });
        true
    }

    /// Drop every entry carrying one of `tags` and advance their revisions.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&mut self, tags: &[Tag]) -> usize {
        for tag in tags {
            *self.revisions.entry(*tag).or_insert(0) += 1;
        }
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.tags.iter().any(|t| tags.contains(t)));
        before - self.entries.len()
    }

    /// Forget every payload, e.g. on sign-out.
    ///
    /// Every revision moves on, so responses still in flight are discarded.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
