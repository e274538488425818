//! Public storefront for a single merchant, reached from "Sold by" links.
//!
//! Reuses the catalog search and sort machinery, scoped to one merchant's
//! listings. The heading borrows the company name from whichever listing
//! carries it, since there is no standalone merchant endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::types::Product;
use crate::pages::products::{filter_and_sort, SortOrder};

fn merchant_title(list: &[Product]) -> String {
    list.iter()
        .find_map(|p| p.merchant_company_name.clone())
        .unwrap_or_else(|| "Merchant".to_owned())
}

#[component]
pub fn MerchantProductsPage() -> impl IntoView {
    let params = use_params_map();
    let merchant_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let sort_order = RwSignal::new(SortOrder::Newest);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            products.try_set(api::fetch_products().await.unwrap_or_default());
            loading.try_set(false);
        });
    });

    let visible = move || {
        let owned: Vec<Product> = match merchant_id() {
            Some(id) => products
                .get()
                .into_iter()
                .filter(|p| p.merchant_id == id)
                .collect(),
            None => Vec::new(),
        };
        filter_and_sort(&owned, &query.get(), None, sort_order.get())
    };

    view! {
        <div class="merchant-shop">
            <div class="merchant-shop__toolbar">
                <div>
                    <h1 class="merchant-shop__title">{move || merchant_title(&visible())}</h1>
                    <p class="merchant-shop__subtitle">"All listings by this merchant"</p>
                </div>
                <div class="merchant-shop__controls">
                    <input
                        class="merchant-shop__search"
                        type="text"
                        placeholder="Search this merchant…"
                        aria-label="Search this merchant"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <select
                        class="merchant-shop__select"
                        aria-label="Sort listings"
                        on:change=move |ev| {
                            sort_order.set(SortOrder::from_key(&event_target_value(&ev)));
                        }
                    >
                        {SortOrder::ALL
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <option
                                        value=order.key()
                                        selected=move || sort_order.get() == order
                                    >
                                        {order.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <a class="btn merchant-shop__back" href="/">
                        "← Back to all"
                    </a>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! { <p class="merchant-shop__loading">"Loading products..."</p> }
                }
            >
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        view! {
                            <p class="merchant-shop__empty">
                                "This merchant has no active listings."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="merchant-shop__grid">
                                {list
                                    .into_iter()
                                    .map(|p| view! { <ProductCard product=p /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "merchant_products_test.rs"]
mod merchant_products_test;
