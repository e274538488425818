//! Customer wishlist page.

use leptos::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::net::api;
use crate::net::types::Product;
use crate::util::auth;
use crate::util::format;

/// Wishlist grid with per-item removal. Customer-only.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let session = auth::use_session();

    let items = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(record) = session.get_untracked().record else {
                return;
            };
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_wishlist(&record).await {
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

    let on_remove = move |product_id: i64| {
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::remove_from_wishlist(&record, product_id).await {
                Ok(()) => load(),
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
                    <div class="wishlist-page">
                        {move || {
                            if session.get().loading {
                                view! { <p class="wishlist-page__status">"Loading..."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <AccessDenied message="Only customers can view wishlist." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="wishlist-page">
                <h1 class="wishlist-page__title">"My Wishlist"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="wishlist-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="wishlist-page__status">"Loading..."</p> }
                >
                    <Show
                        when=move || !items.get().is_empty()
                        fallback=move || {
                            view! { <p class="wishlist-page__empty">"No items in wishlist."</p> }
                        }
                    >
                        <div class="wishlist-page__grid">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|product| {
                                        let href = format!("/product/{}", product.id);
                                        let photo = product
                                            .photo_ids
                                            .first()
                                            .map(|photo_id| {
                                                api::product_photo_url(product.id, *photo_id)
                                            });
                                        let price = format::format_usd(product.price);
                                        let product_id = product.id;
                                        view! {
                                            <div class="wishlist-card">
                                                <a class="wishlist-card__media" href=href.clone()>
                                                    {match photo {
                                                        Some(src) => {
                                                            view! {
                                                                <img
                                                                    class="wishlist-card__photo"
                                                                    src=src
                                                                    alt=product.name.clone()
                                                                />
                                                            }
                                                                .into_any()
                                                        }
                                                        None => {
                                                            view! {
                                                                <div class="wishlist-card__placeholder">
                                                                    "No image"
                                                                </div>
                                                            }
                                                                .into_any()
                                                        }
                                                    }}
                                                </a>
                                                <div class="wishlist-card__body">
                                                    <span class="wishlist-card__category">
                                                        {product.category_name.clone().unwrap_or_default()}
                                                    </span>
                                                    <a class="wishlist-card__name" href=href.clone()>
                                                        {product.name.clone()}
                                                    </a>
                                                    <span class="wishlist-card__price">{price}</span>
                                                    <div class="wishlist-card__actions">
                                                        <a
                                                            class="btn btn--primary wishlist-card__view"
                                                            href=href
                                                        >
                                                            "View"
                                                        </a>
                                                        <button
                                                            class="btn wishlist-card__remove"
                                                            on:click=move |_| on_remove(product_id)
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
