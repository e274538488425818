//! Product catalog page with search, category filter, and sorting.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. The catalog is fetched once and every
//! toolbar control works on the in-memory list, so typing in the search box
//! never re-hits the server.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::types::{Category, Product};
use crate::util::format;

/// Sort orders offered by the catalog toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Stock,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceAsc, Self::PriceDesc, Self::Stock];

    pub fn key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
            Self::Stock => "stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAsc => "Price ↑",
            Self::PriceDesc => "Price ↓",
            Self::Stock => "Stock",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.key() == key)
            .unwrap_or_default()
    }
}

/// True when the product matches the free-text search over name, details,
/// and category name. A blank query matches everything.
fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&needle);
    hit(&product.name)
        || product.details.as_deref().is_some_and(hit)
        || product.category_name.as_deref().is_some_and(hit)
}

/// Applies search, category filter, and sort to the fetched catalog.
pub fn filter_and_sort(
    products: &[Product],
    query: &str,
    category_id: Option<i64>,
    order: SortOrder,
) -> Vec<Product> {
    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| matches_query(p, query))
        .filter(|p| category_id.is_none_or(|id| p.category_id == Some(id)))
        .cloned()
        .collect();
    sort_products(&mut list, order);
    list
}

/// Sorts in place. Newest puts undated listings last and breaks ties by id,
/// after normalizing timestamps so mixed separators compare correctly.
pub fn sort_products(list: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Newest => list.sort_by(|a, b| {
            let a_key = a.created_at.as_deref().map(format::normalize_timestamp);
            let b_key = b.created_at.as_deref().map(format::normalize_timestamp);
            b_key.cmp(&a_key).then_with(|| b.id.cmp(&a.id))
        }),
        SortOrder::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Stock => list.sort_by(|a, b| b.stock_count.cmp(&a.stock_count)),
    }
}

fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_owned()
    } else {
        format!("{count} results")
    }
}

/// Public catalog page. Loads the product list and categories once, then
/// filters and sorts locally.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);

    let query = RwSignal::new(String::new());
    let category_filter = RwSignal::new(None::<i64>);
    let sort_order = RwSignal::new(SortOrder::Newest);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // A category failure should not blank the catalog, so both
            // fetches degrade to empty lists independently.
            let fetched = api::fetch_products().await.unwrap_or_default();
            let cats = api::fetch_categories().await.unwrap_or_default();
            products.try_set(fetched);
            categories.try_set(cats);
            loading.try_set(false);
        });
    });

    let visible = move || {
        filter_and_sort(
            &products.get(),
            &query.get(),
            category_filter.get(),
            sort_order.get(),
        )
    };

    view! {
        <div class="catalog-page">
            <div class="catalog-page__toolbar">
                <div>
                    <h1 class="catalog-page__title">"All Products"</h1>
                    <p class="catalog-page__subtitle">"Filter, sort and browse the catalog"</p>
                </div>
                <div class="catalog-page__controls">
                    <input
                        class="catalog-page__search"
                        type="text"
                        placeholder="Search products…"
                        aria-label="Search products"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <select
                        class="catalog-page__select"
                        aria-label="Filter by category"
                        on:change=move |ev| {
                            category_filter.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="" selected=move || category_filter.get().is_none()>
                            "All categories"
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
                                            selected=move || category_filter.get() == Some(id)
                                        >
                                            {c.name}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <select
                        class="catalog-page__select"
                        aria-label="Sort products"
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
                </div>
            </div>

            <Show when=move || !loading.get()>
                <div class="catalog-page__count">
                    {move || result_count_label(visible().len())}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="catalog-page__loading">"Loading products..."</p> }
            >
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        view! {
                            <p class="catalog-page__empty">"No products match your filters."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="catalog-page__grid">
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
#[path = "products_test.rs"]
mod products_test;
