//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session tokens and UI preferences are the only things the console keeps
//! in the browser. These helpers centralize the hydrate-only web-sys glue;
//! during SSR every read is empty and every write is dropped.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best effort. Quota errors, private-mode restrictions and
//! malformed JSON are swallowed and read back as "nothing stored".

use leptos::prelude::*;
use serde::Serialize;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete whatever is stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_raw(key, &raw);
    }
}

/// Restore stored UI preferences once hydrated, then write back every change.
///
/// The first effect run happens in the browser after hydration, so the
/// server-rendered markup always matches the default preferences.
pub fn install_ui_persistence(ui: RwSignal<UiState>) {
    let restored = StoredValue::new(false);
    Effect::new(move || {
        let current = ui.get();
        if !restored.get_value() {
            restored.set_value(true);
            let stored = UiState::load();
            if stored != current {
                ui.set(stored);
            }
            return;
        }
        current.persist();
    });
}
