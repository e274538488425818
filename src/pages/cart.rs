//! Customer cart page with item removal and checkout.

use leptos::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::net::api;
use crate::net::types::CartItem;
use crate::util::auth;
use crate::util::format;

/// Sum of line totals. The server already priced each line, so the page
/// only adds; it never recomputes `count * unit`.
fn grand_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.total_price).sum()
}

/// Cart page. Customer-only: anyone else gets the denial placeholder and no
/// request is made.
#[component]
pub fn CartPage() -> impl IntoView {
    let session = auth::use_session();

    let items = RwSignal::new(Vec::<CartItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(record) = session.get_untracked().record else {
                return;
            };
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_cart(&record).await {
                    Ok(list) => {
                        items.try_set(list);
                        error.try_set(None);
                    }
                    Err(e) => {
                        items.try_set(Vec::new());
                        error.try_set(Some(e.user_message()));
                    }
                }
                loading.try_set(false);
            });
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !session.get().is_customer() {
            return;
        }
        requested.set(true);
        load();
    });

    let on_remove = move |item_id: i64| {
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::remove_cart_item(&record, item_id).await {
                Ok(()) => load(),
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = record;
    };

    let on_checkout = move |_| {
        if items.get().is_empty() {
            return;
        }
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::checkout(&record).await {
                Ok(()) => {
                    notice.try_set(Some("Checkout successful!".to_owned()));
                    load();
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = record;
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_customer()
            fallback=move || {
                view! {
                    <div class="cart-page">
                        {move || {
                            if session.get().loading {
                                view! { <p class="cart-page__status">"Loading..."</p> }
                                    .into_any()
                            } else {
                                view! { <AccessDenied message="Only customers can view cart." /> }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="cart-page">
                <div class="cart-page__header">
                    <h1 class="cart-page__title">"My Cart"</h1>
                    <span class="cart-page__count">
                        {move || format!("{} items", items.get().len())}
                    </span>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="cart-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="cart-page__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="cart-page__status">"Loading..."</p> }
                >
                    <Show
                        when=move || !items.get().is_empty()
                        fallback=move || view! { <p class="cart-page__empty">"Cart is empty."</p> }
                    >
                        <ul class="cart-page__list">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let unit = format::format_usd(item.price_per_unit);
                                        let line_total = format::format_usd(item.total_price);
                                        let item_id = item.item_id;
                                        view! {
                                            <li class="cart-page__item">
                                                <div class="cart-page__item-info">
                                                    <span class="cart-page__item-name">
                                                        {item.product_name.clone()}
                                                    </span>
                                                    <span class="cart-page__item-count">
                                                        "Count: " {item.count}
                                                    </span>
                                                    <span class="cart-page__item-unit">
                                                        "Unit: " {unit}
                                                    </span>
                                                    <span class="cart-page__item-total">
                                                        "Total: " {line_total}
                                                    </span>
                                                </div>
                                                <button
                                                    class="btn cart-page__remove"
                                                    on:click=move |_| on_remove(item_id)
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <div class="cart-page__footer">
                        <span class="cart-page__grand-total">
                            "Grand Total: "
                            {move || format::format_usd(grand_total(&items.get()))}
                        </span>
                        <button
                            class="btn btn--primary cart-page__checkout"
                            disabled=move || items.get().is_empty()
                            on:click=on_checkout
                        >
                            "Checkout"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;
