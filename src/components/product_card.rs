//! Product summary card for the catalog, wishlist, and merchant grids.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent across every grid that shows
//! products while centralizing the badge and price formatting rules.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Product;
use crate::util::format;

/// A clickable card linking to a product's detail page.
///
/// The "New" badge compares the listing date against the viewer's clock, so
/// it is computed after mount; server-rendered markup never carries it.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let photo = product
        .photo_ids
        .first()
        .map(|photo_id| api::product_photo_url(product.id, *photo_id));
    let price_label = format::format_usd(product.price);
    let added = product.created_at.as_deref().map(format::display_date);
    let category = product.category_name.clone().unwrap_or_default();
    let details = product.details.clone().unwrap_or_default();
    let low_stock = format::low_stock(product.stock_count);

    let is_new = RwSignal::new(false);
    {
        let created_at = product.created_at.clone();
        Effect::new(move || {
            let Some(raw) = created_at.as_deref() else {
                return;
            };
            let fresh = format::created_at_ms(raw)
                .zip(format::now_ms())
                .is_some_and(|(created, now)| format::is_new_listing(created, now));
            is_new.set(fresh);
        });
    }

    view! {
        <article class="product-card">
            <a class="product-card__media" href=href.clone()>
                {match photo {
                    Some(src) => {
                        view! {
                            <img class="product-card__photo" src=src alt=product.name.clone() />
                        }
                            .into_any()
                    }
                    None => {
                        view! { <div class="product-card__placeholder">"No image"</div> }
                            .into_any()
                    }
                }}
                <div class="product-card__badges">
                    <Show when=move || is_new.get()>
                        <span class="product-card__badge product-card__badge--new">"New"</span>
                    </Show>
                    <Show when=move || low_stock>
                        <span class="product-card__badge product-card__badge--low">
                            "Low stock"
                        </span>
                    </Show>
                </div>
                <div class="product-card__headline">
                    <h3 class="product-card__name" title=product.name.clone()>
                        {product.name.clone()}
                    </h3>
                    <span class="product-card__price">{price_label}</span>
                </div>
            </a>
            <div class="product-card__body">
                <p class="product-card__details">{details}</p>
                {added
                    .map(|date| {
                        view! { <span class="product-card__added">"Added: " {date}</span> }
                    })}
                <div class="product-card__footer">
                    <span class="product-card__category" title=category.clone()>
                        {category.clone()}
                    </span>
                    <a class="btn btn--primary product-card__view" href=href>
                        "View"
                    </a>
                </div>
            </div>
        </article>
    }
}
