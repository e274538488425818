//! Dark mode initialization and toggle.
//!
//! An explicit stored preference (`"dark"`/`"light"` under the theme key)
//! wins; otherwise the system color scheme decides. Applying a preference
//! toggles the `dark` class on the `<html>` element. SSR paths no-op to
//! keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

/// `localStorage` key for the theme choice. Distinct from the session key;
/// cross-tab session handling ignores it.
const THEME_KEY: &str = "theme";

/// Interpret a stored theme value. Unrecognized values mean "no choice".
fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously chose dark, or if the system
/// prefers dark and no usable choice is stored.
pub fn read_preference() -> bool {
    if let Some(choice) = storage::get_item(THEME_KEY).as_deref().and_then(parse_stored) {
        return choice;
    }

    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set_item(THEME_KEY, if next { "dark" } else { "light" });
    next
}
