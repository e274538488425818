//! Browser `localStorage` helpers shared by the session store and theme
//! preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write/remove behavior so callers never
//! repeat web-sys glue. All operations are best-effort: a missing window,
//! denied storage, or quota error degrades to "no value" rather than a
//! panic, which keeps server rendering and private-mode browsers working.

/// Read the raw string stored under `key`, if any.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write `value` under `key`, replacing any previous value.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`. Removing an absent key is a no-op.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
