//! DESIGN
//! ======
//! Listing edit and delete for the owning merchant. Deletion is the tricky
//! part: the server answers a delete of an ordered product with a raw 500
//! whose body mentions the foreign key constraint, because order rows must
//! keep pointing at the listing. The page translates that (and the plain
//! 403 for someone else's listing) into wording a merchant can act on
//! instead of surfacing database internals.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::access_denied::AccessDenied;
use crate::net::api::{self, ApiError};
use crate::net::types::Category;
use crate::pages::create_product::validate_listing;
use crate::util::auth;

/// Friendly wording for the delete failures the server actually produces.
fn delete_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { status: 403, .. } => {
            "You cannot delete this product. You are not allowed to delete it.".to_owned()
        }
        ApiError::Status {
            status: 500,
            message: Some(message),
        } if message.contains("violates foreign key constraint") => {
            "This product already has orders in the system. \
             Products that are part of orders cannot be deleted."
                .to_owned()
        }
        ApiError::Status {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Status { message: None, .. } => "Delete failed.".to_owned(),
        other => other.user_message(),
    }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let session = auth::use_session();
    let params = use_params_map();
    let route_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let categories = RwSignal::new(Vec::<Category>::new());
    let category_id = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let details = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());

    let loaded = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let load = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            categories.try_set(api::fetch_categories().await.unwrap_or_default());
            match api::fetch_product(id).await {
                Ok(product) => {
                    category_id.try_set(product.category_id);
                    name.try_set(product.name);
                    details.try_set(product.details.unwrap_or_default());
                    price.try_set(product.price.to_string());
                    stock.try_set(product.stock_count.to_string());
                    loaded.try_set(true);
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    // Refetch when the route id changes without a remount.
    let loaded_for = RwSignal::new(None::<i64>);
    Effect::new(move || {
        if !session.get().is_merchant() {
            return;
        }
        let Some(id) = route_id() else {
            return;
        };
        if loaded_for.get() == Some(id) {
            return;
        }
        loaded_for.set(Some(id));
        loaded.set(false);
        load(id);
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = route_id() else {
            return;
        };
        let request = match validate_listing(
            category_id.get(),
            &name.get(),
            &details.get(),
            &price.get(),
            &stock.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        notice.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_product(&record, id, &request).await {
                Ok(()) => {
                    notice.try_set(Some("Product updated!".to_owned()));
                }
                Err(e) => {
                    error.try_set(Some(format!("Update failed: {}", e.user_message())));
                }
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, request, id);
            busy.set(false);
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = route_id() else {
                return;
            };
            let Some(record) = session.get().record else {
                return;
            };
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(
                            "Are you sure? This will permanently remove the product (if allowed).",
                        )
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            error.set(None);
            leptos::task::spawn_local(async move {
                match api::delete_product(&record, id).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        error.try_set(Some(delete_error_message(&e)));
                    }
                }
            });
        }
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_merchant()
            fallback=move || {
                view! {
                    <div class="listing-form-page">
                        {move || {
                            if session.get().loading {
                                view! { <p class="listing-form-page__status">"Loading..."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <AccessDenied message="Only merchants can edit products." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="listing-form-page listing-form-page--narrow">
                <section class="card listing-form-page__card">
                    <div class="listing-form-page__head">
                        <h1 class="listing-form-page__title">"Edit Product"</h1>
                        <button class="btn btn--danger listing-form-page__delete" on:click=on_delete>
                            "Delete"
                        </button>
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|text| view! { <p class="listing-form-page__error">{text}</p> })
                    }}
                    {move || {
                        notice
                            .get()
                            .map(|text| view! { <p class="listing-form-page__notice">{text}</p> })
                    }}

                    <Show
                        when=move || loaded.get()
                        fallback=|| {
                            view! {
                                <p class="listing-form-page__status">"Loading product..."</p>
                            }
                        }
                    >
                        <form class="listing-form" on:submit=on_save>
                            <label class="listing-form__label">
                                "Category"
                                <select
                                    class="listing-form__select"
                                    on:change=move |ev| {
                                        category_id
                                            .set(event_target_value(&ev).parse::<i64>().ok());
                                    }
                                >
                                    <option value="" selected=move || category_id.get().is_none()>
                                        "Select category..."
                                    </option>
                                    {move || {
                                        categories
                                            .get()
                                            .into_iter()
                                            .map(|c| {
                                                let id = c.id;
                                                view! {
                                                    <option
                                                        value=id.to_string()
                                                        selected=move || category_id.get() == Some(id)
                                                    >
                                                        {c.name}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </label>

                            <label class="listing-form__label">
                                "Name"
                                <input
                                    class="listing-form__input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="listing-form__label">
                                "Details"
                                <textarea
                                    class="listing-form__textarea"
                                    prop:value=move || details.get()
                                    on:input=move |ev| details.set(event_target_value(&ev))
                                ></textarea>
                            </label>

                            <div class="listing-form__row">
                                <label class="listing-form__label">
                                    "Price"
                                    <input
                                        class="listing-form__input"
                                        type="number"
                                        step="0.01"
                                        prop:value=move || price.get()
                                        on:input=move |ev| price.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="listing-form__label">
                                    "Stock Count"
                                    <input
                                        class="listing-form__input"
                                        type="number"
                                        prop:value=move || stock.get()
                                        on:input=move |ev| stock.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>

                            <button
                                class="btn btn--primary listing-form__submit"
                                type="submit"
                                disabled=move || busy.get()
                            >
                                {move || if busy.get() { "Saving…" } else { "Save Changes" }}
                            </button>

                            <p class="listing-form-page__footnote">
                                "You cannot delete a product that already appears in customer "
                                "orders. This is normal business logic so that order history "
                                "remains valid."
                            </p>
                        </form>
                    </Show>
                </section>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "edit_product_test.rs"]
mod edit_product_test;
