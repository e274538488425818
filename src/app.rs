//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    cart::CartPage, create_product::CreateProductPage, edit_product::EditProductPage,
    login::LoginPage, merchant_dashboard::MerchantDashboardPage,
    merchant_orders::MerchantOrdersPage, merchant_products::MerchantProductsPage,
    orders::OrdersPage, product_detail::ProductDetailPage, products::ProductsPage,
    register::RegisterPage, wishlist::WishlistPage,
};
use crate::state::ui::UiState;
use crate::util::{auth, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
/// Static `merchant/*` routes are declared before the merchant storefront
/// so its id parameter never swallows them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    auth::provide_session();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Resolve the stored theme after mount; SSR always renders light.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Marketplace"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProductsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("id"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("wishlist") view=WishlistPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("merchant") view=MerchantDashboardPage/>
                    <Route
                        path=(StaticSegment("merchant"), StaticSegment("create-product"))
                        view=CreateProductPage
                    />
                    <Route
                        path=(
                            StaticSegment("merchant"),
                            StaticSegment("edit-product"),
                            ParamSegment("id"),
                        )
                        view=EditProductPage
                    />
                    <Route
                        path=(StaticSegment("merchant"), StaticSegment("orders"))
                        view=MerchantOrdersPage
                    />
                    <Route
                        path=(StaticSegment("merchant"), ParamSegment("id"))
                        view=MerchantProductsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
