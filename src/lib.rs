//! # storefront
//!
//! Leptos + WASM client for the marketplace: catalog browsing for anyone,
//! cart/wishlist/orders for customers, listing and incoming-order
//! management for merchants.
//!
//! This crate contains pages, components, session state, and the typed
//! REST client. The server renders the shell and first paint; every call
//! to the marketplace API happens in the browser after hydration, with
//! the session read from `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
