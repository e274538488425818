//! DESIGN
//! ======
//! Listing creation is a two-phase flow: the listing must exist before any
//! photo can be uploaded, because the upload endpoint is keyed by product
//! id. The page therefore keeps the created listing in a signal and swaps
//! the right-hand column from a placeholder to the upload/preview panel
//! once the first phase lands. Photo uploads go one file at a time so a
//! single bad file fails alone instead of aborting the batch.
//!
//! The inline category card exists so merchants can add a missing category
//! without leaving a half-filled form; the new category is auto-selected.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::components::access_denied::AccessDenied;
use crate::net::api;
use crate::net::types::{Category, CategoryRequest, Product, ProductRequest};
use crate::util::{auth, format};

/// Parses and checks the listing form. Price and stock arrive as raw input
/// text so that parse failures produce form errors instead of silent zeros.
pub(crate) fn validate_listing(
    category_id: Option<i64>,
    name: &str,
    details: &str,
    price: &str,
    stock: &str,
) -> Result<ProductRequest, &'static str> {
    let Some(category_id) = category_id else {
        return Err("Select a category.");
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    let details = details.trim();
    if details.is_empty() {
        return Err("Details are required.");
    }
    let Ok(price) = price.trim().parse::<f64>() else {
        return Err("Price must be a number.");
    };
    if !price.is_finite() || price <= 0.0 {
        return Err("Price must be greater than zero.");
    }
    let Ok(stock_count) = stock.trim().parse::<i32>() else {
        return Err("Stock count must be a whole number.");
    };
    if stock_count < 0 {
        return Err("Stock count cannot be negative.");
    }
    Ok(ProductRequest {
        category_id,
        name: name.to_owned(),
        details: details.to_owned(),
        price,
        stock_count,
    })
}

#[component]
pub fn CreateProductPage() -> impl IntoView {
    let session = auth::use_session();

    let categories = RwSignal::new(Vec::<Category>::new());
    let category_id = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let details = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let new_category_name = RwSignal::new(String::new());

    let created = RwSignal::new(None::<Product>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let load_categories = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            categories.try_set(api::fetch_categories().await.unwrap_or_default());
        });
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !session.get().is_merchant() {
            return;
        }
        requested.set(true);
        load_categories();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
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
            match api::create_product(&record, &request).await {
                Ok(product) => {
                    created.try_set(Some(product));
                    notice.try_set(Some("Product created! Now upload photos below.".to_owned()));
                }
                Err(e) => {
                    error.try_set(Some(format!("Create product failed: {}", e.user_message())));
                }
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, request);
            busy.set(false);
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(current) = created.get() else {
                return;
            };
            let Some(record) = session.get().record else {
                return;
            };
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(files) = input.files() else {
                return;
            };
            let picked: Vec<web_sys::File> =
                (0..files.length()).filter_map(|i| files.get(i)).collect();
            if picked.is_empty() {
                return;
            }
            error.set(None);
            let product_id = current.id;
            leptos::task::spawn_local(async move {
                for file in &picked {
                    if let Err(e) = api::upload_product_photo(&record, product_id, file).await {
                        error.try_set(Some(format!(
                            "Photo upload failed for one file: {}",
                            e.user_message()
                        )));
                    }
                }
                // Re-read the listing so the preview picks up the new ids.
                if let Ok(refreshed) = api::fetch_product(product_id).await {
                    created.try_set(Some(refreshed));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_add_category = move |_| {
        let trimmed = new_category_name.get().trim().to_owned();
        if trimmed.is_empty() {
            error.set(Some("Category name cannot be empty.".to_owned()));
            return;
        }
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_category(&record, &CategoryRequest { name: trimmed }).await {
                Ok(category) => {
                    new_category_name.try_set(String::new());
                    category_id.try_set(Some(category.id));
                    notice.try_set(Some("Category added.".to_owned()));
                    if let Ok(list) = api::fetch_categories().await {
                        categories.try_set(list);
                    }
                }
                Err(e) => {
                    error.try_set(Some(format!(
                        "Failed to create category: {}",
                        e.user_message()
                    )));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (record, trimmed);
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
                                    <AccessDenied message="Only merchants can create products." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="listing-form-page">
                <div class="listing-form-page__column">
                    <section class="card listing-form-page__card">
                        <h1 class="listing-form-page__title">"Create Product"</h1>

                        {move || {
                            error
                                .get()
                                .map(|text| view! { <p class="listing-form-page__error">{text}</p> })
                        }}
                        {move || {
                            notice
                                .get()
                                .map(|text| {
                                    view! { <p class="listing-form-page__notice">{text}</p> }
                                })
                        }}

                        <form class="listing-form" on:submit=on_submit>
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
                                {move || if busy.get() { "Creating…" } else { "Create" }}
                            </button>
                        </form>
                    </section>

                    <section class="card listing-form-page__card">
                        <h2 class="listing-form-page__heading">"Add New Category"</h2>
                        <div class="listing-form-page__category-row">
                            <input
                                class="listing-form__input"
                                type="text"
                                placeholder="New category name"
                                prop:value=move || new_category_name.get()
                                on:input=move |ev| {
                                    new_category_name.set(event_target_value(&ev));
                                }
                            />
                            <button class="btn listing-form-page__add" on:click=on_add_category>
                                "Add"
                            </button>
                        </div>
                        <p class="listing-form-page__hint">
                            "Creates the category and refreshes the dropdown above."
                        </p>
                    </section>
                </div>

                <section class="card listing-form-page__card listing-form-page__preview">
                    <h2 class="listing-form-page__heading">"Photos & Preview"</h2>
                    <Show
                        when=move || created.get().is_some()
                        fallback=|| {
                            view! {
                                <p class="listing-form-page__placeholder">
                                    "After you create the product, you can upload photos here."
                                </p>
                            }
                        }
                    >
                        <label class="listing-form__label">
                            "Upload product photos"
                            <input
                                class="listing-form__file"
                                type="file"
                                multiple
                                on:change=on_files
                            />
                        </label>
                        <p class="listing-form-page__hint">
                            "You can select multiple files. Each one is uploaded to the listing."
                        </p>

                        {move || {
                            created
                                .get()
                                .map(|product| {
                                    let photos = product.photo_ids.clone();
                                    let product_id = product.id;
                                    let alt = product.name.clone();
                                    view! {
                                        <div class="listing-preview">
                                            <div class="listing-preview__name">{product.name}</div>
                                            <div class="listing-preview__price">
                                                {format::format_usd(product.price)}
                                            </div>
                                            <div class="listing-preview__stock">
                                                "Stock: " {product.stock_count}
                                            </div>
                                            <div class="listing-preview__photos">
                                                {if photos.is_empty() {
                                                    view! {
                                                        <p class="listing-preview__none">
                                                            "No photos yet"
                                                        </p>
                                                    }
                                                        .into_any()
                                                } else {
                                                    photos
                                                        .into_iter()
                                                        .map(|photo_id| {
                                                            view! {
                                                                <img
                                                                    class="listing-preview__photo"
                                                                    src=api::product_photo_url(
                                                                        product_id,
                                                                        photo_id,
                                                                    )
                                                                    alt=alt.clone()
                                                                />
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()
                                                        .into_any()
                                                }}
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </section>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "create_product_test.rs"]
mod create_product_test;
