//! Merchant landing page linking to the management surfaces.

use leptos::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::util::auth;

#[component]
pub fn MerchantDashboardPage() -> impl IntoView {
    let session = auth::use_session();

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_merchant()
            fallback=move || {
                view! {
                    <div class="merchant-home">
                        {move || {
                            if session.get().loading {
                                view! { <p class="merchant-home__status">"Loading..."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <AccessDenied message="Only merchants can view this page." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="merchant-home">
                <h1 class="merchant-home__title">"Merchant Dashboard"</h1>
                <div class="merchant-home__links">
                    <a class="merchant-home__link" href="/merchant/create-product">
                        <span class="merchant-home__link-name">"Create Product"</span>
                        <span class="merchant-home__link-hint">
                            "Add a new product to the marketplace and upload photos."
                        </span>
                    </a>
                    <a class="merchant-home__link" href="/merchant/orders">
                        <span class="merchant-home__link-name">"View Orders"</span>
                        <span class="merchant-home__link-hint">
                            "See and update incoming orders for your products."
                        </span>
                    </a>
                </div>
            </div>
        </Show>
    }
}
