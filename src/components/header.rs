//! Top navigation bar shown on every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the one surface that always reflects the session: its nav
//! set tracks the signed-in role, and the logout button drives the session
//! teardown flow. It also hosts the dark-mode toggle.

use leptos::prelude::*;

use crate::net::types::AccountType;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::auth;

/// Nav entries for the current session, as `(href, label)` pairs.
fn nav_links(session: &Session) -> &'static [(&'static str, &'static str)] {
    match session.role() {
        Some(AccountType::Customer) => &[
            ("/wishlist", "Wishlist"),
            ("/cart", "Cart"),
            ("/orders", "My Orders"),
        ],
        Some(AccountType::Merchant) => &[
            ("/merchant", "Dashboard"),
            ("/merchant/create-product", "Create Product"),
            ("/merchant/orders", "Orders"),
        ],
        None => &[("/login", "Login"), ("/register", "Register")],
    }
}

/// Site-wide header with role-aware navigation.
#[component]
pub fn Header() -> impl IntoView {
    let session = auth::use_session();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| auth::logout(session);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Marketplace"
            </a>
            <nav class="site-header__nav">
                {move || {
                    nav_links(&session.get())
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a class="site-header__link" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || session.get().is_logged_in()>
                    <span class="site-header__user">
                        {move || session.get().username().unwrap_or_default().to_owned()}
                    </span>
                    <button class="site-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
                <button
                    class="btn site-header__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;
