//! Presentation preferences that survive reloads.
//!
//! DESIGN
//! ======
//! Kept apart from auth and query data so a corrupt or stale stored blob can
//! only ever reset layout choices. Unknown or missing fields fall back to
//! their defaults.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// `localStorage` key for the serialized preferences.
pub const STORAGE_KEY: &str = "transit_admin_ui";

/// Global UI preferences provided as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    /// Navigation rail shows icons only.
    pub nav_collapsed: bool,
    /// Tables use compact row padding.
    pub dense_tables: bool,
}

impl UiState {
    /// Restore from a stored JSON blob; anything unreadable yields defaults.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str(raw).ok()).unwrap_or_default()
    }

    /// Load preferences from `localStorage` (defaults during SSR).
    #[must_use]
    pub fn load() -> Self {
        Self::from_stored(crate::util::storage::load_raw(STORAGE_KEY).as_deref())
    }

    /// Write preferences to `localStorage`; a no-op during SSR.
    pub fn persist(&self) {
        crate::util::storage::save_json(STORAGE_KEY, self);
    }
}
