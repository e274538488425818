//! Product detail page with gallery, stock-aware purchase controls, and a
//! wishlist toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route is public: anyone can read a listing. Only the action block
//! changes with the session: customers get the quantity stepper, cart, and
//! wishlist controls; merchants get an edit link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::image_gallery::ImageGallery;
use crate::net::api;
use crate::net::types::{AddToCartRequest, Product, WishlistRequest};
use crate::util::auth;
use crate::util::format;

/// Validation ahead of the add-to-cart request. `None` means the add may
/// proceed with the chosen quantity.
fn cart_quantity_error(quantity: i32, stock: i32) -> Option<&'static str> {
    if stock <= 0 {
        return Some("Out of stock.");
    }
    if quantity < 1 {
        return Some("Quantity must be at least 1.");
    }
    if quantity > stock {
        return Some("Not enough stock for that quantity.");
    }
    None
}

/// Stepper arithmetic. The selected quantity stays inside `1..=stock`, and a
/// zero-stock listing pins it at 1 so the buttons stay inert rather than
/// underflowing.
fn step_quantity(current: i32, delta: i32, stock: i32) -> i32 {
    (current + delta).clamp(1, stock.max(1))
}

/// Detail page for one listing, keyed by the `:id` route param.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session = auth::use_session();
    let params = use_params_map();
    let route_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let product = RwSignal::new(None::<Product>);
    let loading = RwSignal::new(true);
    let quantity = RwSignal::new(1_i32);
    let in_wishlist = RwSignal::new(false);
    let wish_busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Refetch whenever the route points at a different listing.
    let loaded_for = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(product_id) = route_id() else {
            loading.set(false);
            return;
        };
        if loaded_for.get() == Some(product_id) {
            return;
        }
        loaded_for.set(Some(product_id));
        loading.set(true);
        error.set(None);
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_product(product_id).await {
                Ok(fetched) => {
                    product.try_set(Some(fetched));
                    quantity.try_set(1);
                    in_wishlist.try_set(false);
                }
                Err(_) => {
                    product.try_set(None);
                }
            }
            loading.try_set(false);
        });
    });

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    let on_add_to_cart = move |_| {
        let Some(current) = product.get() else {
            return;
        };
        error.set(None);
        notice.set(None);
        if let Some(message) = cart_quantity_error(quantity.get(), current.stock_count) {
            error.set(Some(message.to_owned()));
            return;
        }
        let Some(record) = session.get().record else {
            return;
        };
        let request = AddToCartRequest {
            product_id: current.id,
            count: quantity.get(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_to_cart(&record, &request).await {
                Ok(()) => {
                    notice.try_set(Some("Added to cart ✅".to_owned()));
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (record, request);
    };

    let on_wishlist_toggle = move |_| {
        let Some(current) = product.get() else {
            return;
        };
        if !session.get().is_customer() || wish_busy.get() {
            return;
        }
        let Some(record) = session.get().record else {
            return;
        };
        wish_busy.set(true);
        error.set(None);
        notice.set(None);
        let product_id = current.id;
        let removing = in_wishlist.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = if removing {
                api::remove_from_wishlist(&record, product_id).await
            } else {
                api::add_to_wishlist(&record, &WishlistRequest { product_id }).await
            };
            match outcome {
                Ok(()) => {
                    in_wishlist.try_set(!removing);
                    let message = if removing {
                        "Removed from wishlist ❌"
                    } else {
                        "Added to wishlist ❤️"
                    };
                    notice.try_set(Some(message.to_owned()));
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
            wish_busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (record, product_id, removing);
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <div class="detail-page">"Loading..."</div> }
        >
            <Show
                when=move || product.get().is_some()
                fallback=move || {
                    view! {
                        <div class="detail-page detail-page--missing">"Could not find product."</div>
                    }
                }
            >
                {move || {
                    product
                        .get()
                        .map(|current| {
                            let stock = current.stock_count;
                            let out_of_stock = stock <= 0;
                            let added = current.created_at.as_deref().map(format::display_date);
                            let price_label = format::format_usd(current.price);
                            let merchant_href = format!("/merchant/{}", current.merchant_id);
                            let edit_href = format!("/merchant/edit-product/{}", current.id);
                            let company = current
                                .merchant_company_name
                                .clone()
                                .unwrap_or_else(|| "Merchant".to_owned());
                            let stock_label = if out_of_stock {
                                "Out of stock".to_owned()
                            } else {
                                format!("{stock} available")
                            };
                            let dec_disabled = move || quantity.get() <= 1;
                            let inc_disabled = move || quantity.get() >= stock;
                            let add_disabled = move || out_of_stock || quantity.get() < 1;
                            view! {
                                <div class="detail-page">
                                    <button class="detail-page__back" on:click=on_back>
                                        "← Back"
                                    </button>
                                    <div class="detail-page__layout">
                                        <ImageGallery
                                            product_id=current.id
                                            photo_ids=current.photo_ids.clone()
                                        />
                                        <div class="detail-page__info">
                                            <span class="detail-page__category">
                                                {current.category_name.clone().unwrap_or_default()}
                                            </span>
                                            <h1 class="detail-page__name">{current.name.clone()}</h1>
                                            {added
                                                .map(|date| {
                                                    view! {
                                                        <span class="detail-page__added">"Added: " {date}</span>
                                                    }
                                                })}
                                            <p class="detail-page__details">
                                                {current.details.clone().unwrap_or_default()}
                                            </p>
                                            <div class="detail-page__price-row">
                                                <span class="detail-page__price">{price_label}</span>
                                                <span
                                                    class="detail-page__stock"
                                                    class:detail-page__stock--out=out_of_stock
                                                >
                                                    "Stock: "
                                                    {stock_label}
                                                </span>
                                            </div>
                                            <p class="detail-page__merchant">
                                                "Sold by: "
                                                <a class="detail-page__merchant-link" href=merchant_href>
                                                    {company}
                                                </a>
                                            </p>

                                            <Show when=move || session.get().is_customer()>
                                                <div class="detail-page__purchase">
                                                    <span class="detail-page__quantity-label">"Quantity"</span>
                                                    <div class="detail-page__stepper">
                                                        <button
                                                            class="btn detail-page__step"
                                                            disabled=dec_disabled
                                                            on:click=move |_| {
                                                                quantity.update(|q| *q = step_quantity(*q, -1, stock));
                                                            }
                                                        >
                                                            "-"
                                                        </button>
                                                        <span class="detail-page__quantity">
                                                            {move || quantity.get()}
                                                        </span>
                                                        <button
                                                            class="btn detail-page__step"
                                                            disabled=inc_disabled
                                                            on:click=move |_| {
                                                                quantity.update(|q| *q = step_quantity(*q, 1, stock));
                                                            }
                                                        >
                                                            "+"
                                                        </button>
                                                        <span class="detail-page__stock-hint">
                                                            "In stock: " {stock}
                                                        </span>
                                                    </div>
                                                    <button
                                                        class="btn btn--primary detail-page__add"
                                                        disabled=add_disabled
                                                        on:click=on_add_to_cart
                                                    >
                                                        "Add to Cart"
                                                    </button>
                                                    <button
                                                        class="btn detail-page__wishlist"
                                                        disabled=move || wish_busy.get()
                                                        on:click=on_wishlist_toggle
                                                    >
                                                        {move || {
                                                            if in_wishlist.get() {
                                                                "Remove from Wishlist"
                                                            } else {
                                                                "Add to Wishlist ❤️"
                                                            }
                                                        }}
                                                    </button>
                                                </div>
                                            </Show>

                                            <Show when=move || session.get().is_merchant()>
                                                <a class="btn detail-page__edit" href=edit_href.clone()>
                                                    "Edit Product"
                                                </a>
                                            </Show>

                                            <Show when=move || error.get().is_some()>
                                                <p class="detail-page__error">
                                                    {move || error.get().unwrap_or_default()}
                                                </p>
                                            </Show>
                                            <Show when=move || notice.get().is_some()>
                                                <p class="detail-page__notice">
                                                    {move || notice.get().unwrap_or_default()}
                                                </p>
                                            </Show>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </Show>
    }
}

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;
