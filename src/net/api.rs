//! REST API helpers for communicating with the marketplace server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Endpoints that require a role take an `&AuthRecord`, so an
//! unauthenticated call to a gated endpoint cannot be written at all;
//! pages decide whether they even hold a record before calling in.
//! A 401/403 answer surfaces as a page-level error and never clears the
//! stored session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AddToCartRequest, AuthRecord, CancelOrderRequest, CartItem, Category, CategoryRequest,
    LoginRequest, Order, Product, ProductRequest, RegisterRequest, UpdateOrderStatusRequest,
    WishlistRequest,
};

/// Failure of an API call, from transport up to an HTTP error status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, refused, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// Whether the server refused the call for auth reasons.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Copy shown to the user when a page has no more specific mapping.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Status { status: 401 | 403, .. } => "You are not allowed to do that.".to_owned(),
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Status { status, message: None } => format!("Request failed ({status})."),
        }
    }
}

/// `Authorization` header value for a stored session.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(auth: &AuthRecord) -> String {
    format!("{} {}", auth.token_type, auth.token)
}

/// Pull a human-readable message out of an error response body.
///
/// The server usually answers with a JSON body carrying `message` or
/// `error`; proxies may answer with plain text.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(raw: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(raw) {
        Ok(body) => body.message.or(body.error).filter(|m| !m.trim().is_empty()),
        Err(_) => Some(raw.to_owned()),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: i64) -> String {
    format!("/products/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_photos_endpoint(id: i64) -> String {
    format!("/products/{id}/photos")
}

/// Image URL for a product photo, usable directly as an `img src`.
pub fn product_photo_url(product_id: i64, photo_id: i64) -> String {
    format!("/products/{product_id}/photos/{photo_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_item_endpoint(item_id: i64) -> String {
    format!("/cart/items/{item_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_cancel_endpoint(order_id: i64) -> String {
    format!("/orders/{order_id}/cancel")
}

#[cfg(any(test, feature = "hydrate"))]
fn merchant_order_status_endpoint(order_id: i64) -> String {
    format!("/merchant/orders/{order_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn wishlist_item_endpoint(product_id: i64) -> String {
    format!("/wishlist/{product_id}")
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: &gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let raw = resp.text().await.unwrap_or_default();
    ApiError::Status { status, message: extract_error_message(&raw) }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================
// Auth (public)
// =============================================================

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// `Status { status: 401, .. }` for bad credentials; transport and decode
/// failures as usual.
pub async fn login(request: &LoginRequest) -> Result<AuthRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/login")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/register`. Answers with a live
/// session, so registration doubles as the first login.
///
/// # Errors
///
/// Conflicting usernames and validation problems come back as `Status`
/// errors with a server message.
pub async fn register(request: &RegisterRequest) -> Result<AuthRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/register")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================
// Catalog (public)
// =============================================================

/// Fetch every product via `GET /products`.
///
/// # Errors
///
/// Transport, decode, or HTTP status failures.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/products")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one product via `GET /products/{id}`.
///
/// # Errors
///
/// `Status { status: 404, .. }` for an unknown id.
pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&product_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all categories via `GET /categories`.
///
/// # Errors
///
/// Transport, decode, or HTTP status failures.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/categories")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================
// Cart + wishlist + orders (customer)
// =============================================================

/// Fetch the cart via `GET /cart`.
///
/// # Errors
///
/// `Status { status: 403, .. }` when the session is not a customer.
pub async fn fetch_cart(auth: &AuthRecord) -> Result<Vec<CartItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/cart")
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Add a product to the cart via `POST /cart/items`.
///
/// # Errors
///
/// Insufficient stock and similar rule violations arrive as `Status`
/// errors with a server message.
pub async fn add_to_cart(auth: &AuthRecord, request: &AddToCartRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/cart/items")
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove a cart line via `DELETE /cart/items/{itemId}`.
///
/// # Errors
///
/// Transport or HTTP status failures.
pub async fn remove_cart_item(auth: &AuthRecord, item_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&cart_item_endpoint(item_id))
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, item_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the customer's orders via `GET /orders`.
///
/// # Errors
///
/// Transport, decode, or HTTP status failures.
pub async fn fetch_orders(auth: &AuthRecord) -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/orders")
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Turn the cart into orders via `POST /orders`.
///
/// # Errors
///
/// An empty cart or stale stock arrives as a `Status` error with a
/// server message.
pub async fn checkout(auth: &AuthRecord) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/orders")
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Cancel an order via `PATCH /orders/{id}/cancel`. The server requires a
/// non-blank reason.
///
/// # Errors
///
/// Orders outside the cancellable statuses come back as `Status` errors.
pub async fn cancel_order(
    auth: &AuthRecord,
    order_id: i64,
    request: &CancelOrderRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&order_cancel_endpoint(order_id))
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, order_id, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the wishlist via `GET /wishlist`.
///
/// # Errors
///
/// Transport, decode, or HTTP status failures.
pub async fn fetch_wishlist(auth: &AuthRecord) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/wishlist")
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Add a product to the wishlist via `POST /wishlist`.
///
/// # Errors
///
/// Transport or HTTP status failures.
pub async fn add_to_wishlist(auth: &AuthRecord, request: &WishlistRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/wishlist")
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove a product from the wishlist via `DELETE /wishlist/{productId}`.
///
/// # Errors
///
/// Transport or HTTP status failures.
pub async fn remove_from_wishlist(auth: &AuthRecord, product_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&wishlist_item_endpoint(product_id))
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, product_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// =============================================================
// Product + order management (merchant)
// =============================================================

/// Create a listing via `POST /products`. The created product comes back
/// with its id so photos can be attached right away.
///
/// # Errors
///
/// Validation problems arrive as `Status` errors with a server message.
pub async fn create_product(auth: &AuthRecord, request: &ProductRequest) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/products")
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a listing via `PUT /products/{id}`.
///
/// # Errors
///
/// `Status { status: 403, .. }` when the listing belongs to another
/// merchant.
pub async fn update_product(
    auth: &AuthRecord,
    id: i64,
    request: &ProductRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&product_endpoint(id))
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a listing via `DELETE /products/{id}`.
///
/// # Errors
///
/// `Status { status: 403, .. }` for another merchant's listing; a
/// `Status { status: 500, .. }` mentioning a foreign key constraint means
/// the product is referenced by carts or orders.
pub async fn delete_product(auth: &AuthRecord, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&product_endpoint(id))
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a category via `POST /categories`.
///
/// # Errors
///
/// Duplicate names arrive as `Status` errors with a server message.
pub async fn create_category(auth: &AuthRecord, request: &CategoryRequest) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/categories")
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch orders on this merchant's listings via `GET /merchant/orders`.
///
/// # Errors
///
/// `Status { status: 403, .. }` when the session is not a merchant.
pub async fn fetch_merchant_orders(auth: &AuthRecord) -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/merchant/orders")
            .header("Authorization", &authorization_value(auth))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Move an order to a new status via `PATCH /merchant/orders/{id}/status`.
/// Merchant rejections must carry a reason.
///
/// # Errors
///
/// Invalid transitions arrive as `Status` errors with a server message.
pub async fn update_order_status(
    auth: &AuthRecord,
    order_id: i64,
    request: &UpdateOrderStatusRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&merchant_order_status_endpoint(order_id))
            .header("Authorization", &authorization_value(auth))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, order_id, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Attach a photo to a listing via `POST /products/{id}/photos`
/// (multipart field `file`). Browser only; callers live inside
/// hydrate-gated handlers.
///
/// # Errors
///
/// Transport failures, rejected uploads, and form construction problems.
#[cfg(feature = "hydrate")]
pub async fn upload_product_photo(
    auth: &AuthRecord,
    product_id: i64,
    file: &web_sys::File,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build upload form".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;

    let resp = gloo_net::http::Request::post(&product_photos_endpoint(product_id))
        .header("Authorization", &authorization_value(auth))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(&resp).await);
    }
    Ok(())
}
