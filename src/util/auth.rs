//! Session hook: login/logout/refresh transitions over the session store,
//! plus cross-tab synchronization.
//!
//! DESIGN
//! ======
//! The store is the single source of truth. Every transition writes the
//! store first and then re-reads it into the `Session` signal, so two tabs
//! can race on the same record and both converge on whatever was written
//! last. Cross-tab changes arrive via the browser `storage` event; whether
//! an event is relevant is a pure predicate so the notification path can
//! be exercised without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::AuthRecord;
use crate::state::session::Session;
use crate::util::session_store;

/// Create the session signal, provide it as context, and start the initial
/// store read plus the cross-tab listener. Call once from the app root.
pub fn provide_session() -> RwSignal<Session> {
    let session = RwSignal::new(Session::loading());
    provide_context(session);

    // Resolve the stored session after mount; SSR output stays in the
    // loading state so server and first client render agree.
    Effect::new(move || {
        refresh(session);
    });

    install_storage_listener(session);
    session
}

/// Access the session signal provided by the app root.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Persist `record` and move the session to logged in.
///
/// The snapshot is re-read from the store rather than trusted from memory,
/// so a failed write (storage denied) leaves the session logged out
/// instead of half-applied.
pub fn login(session: RwSignal<Session>, record: &AuthRecord) {
    session_store::save(record);
    refresh(session);
}

/// Clear the stored session and move to logged out, then return to the
/// home page.
///
/// The state transition completes before navigation; the page change is
/// cosmetic, not load-bearing.
pub fn logout(session: RwSignal<Session>) {
    session_store::clear();
    session.set(Session { record: None, loading: false });
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}

/// Re-read the store into the signal.
pub fn refresh(session: RwSignal<Session>) {
    let record = session_store::get();
    session.set(Session { record, loading: false });
}

/// Whether a `storage` event concerns the session record.
///
/// A `None` key means the whole storage area was cleared, which includes
/// the session.
pub fn storage_change_is_relevant(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == session_store::AUTH_KEY,
    }
}

/// Subscribe to cross-tab `storage` events for the life of the tab.
///
/// Last writer wins: the handler never merges, it re-reads the store.
fn install_storage_listener(session: RwSignal<Session>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::wrap(Box::new(move |ev: web_sys::StorageEvent| {
            let key = ev.key();
            if storage_change_is_relevant(key.as_deref()) {
                refresh(session);
            }
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);
        if window
            .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("session: could not subscribe to storage events");
        }
        // Listener lives as long as the tab.
        handler.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
