//! Shared wire DTOs for the marketplace HTTP API.
//!
//! DESIGN
//! ======
//! Field and variant spellings mirror the server's JSON schema exactly
//! (camelCase fields, SCREAMING_SNAKE_CASE enums) so request/response code
//! stays rename-driven instead of hand-mapped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role attached to a session.
///
/// Fixed for the lifetime of a session; switching roles requires a fresh
/// login under a different account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Shopper: cart, wishlist, and order endpoints.
    Customer,
    /// Seller: product management and incoming-order endpoints.
    Merchant,
}

/// An authenticated session as returned by the auth endpoints and persisted
/// by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    /// Opaque bearer credential. An empty token is treated as logged out.
    pub token: String,
    /// Header scheme label (`"Bearer"` from the current server).
    pub token_type: String,
    /// Display identity for the header.
    pub username: String,
    /// Account role.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Lifecycle status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed by the customer, not yet handled by the merchant.
    Created,
    /// Accepted by the merchant, awaiting delivery.
    Accepted,
    /// Delivered terminal state.
    Delivered,
    /// Cancelled by the customer with a reason.
    RejectByCustomer,
    /// Rejected by the merchant with a reason.
    RejectByMerchant,
}

/// A product listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Free-form description; the server may omit it.
    pub details: Option<String>,
    pub price: f64,
    pub stock_count: i32,
    pub merchant_id: i64,
    pub merchant_company_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    /// Photo ids, rendered via the photo URL helper.
    #[serde(default)]
    pub photo_ids: Vec<i64>,
    /// Creation timestamp as an ISO-8601 string (e.g. `2025-08-20T14:30:00`).
    pub created_at: Option<String>,
}

/// A product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One line of the customer's cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub item_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub count: i32,
    pub price_per_unit: f64,
    /// Server-computed `count * price_per_unit`.
    pub total_price: f64,
}

/// An order, from either the customer or the merchant view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub count: i32,
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Set when either side rejected the order.
    pub reject_reason: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
///
/// `company_name` is only meaningful for merchants; the server ignores it
/// for customers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub company_name: Option<String>,
}

/// Payload for `POST /products` and `PUT /products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub category_id: i64,
    pub name: String,
    pub details: String,
    pub price: f64,
    pub stock_count: i32,
}

/// Payload for `POST /categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Payload for `POST /cart/items`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub count: i32,
}

/// Payload for `POST /wishlist`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest {
    pub product_id: i64,
}

/// Payload for `PATCH /orders/{id}/cancel`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub reason: String,
}

/// Payload for `PATCH /merchant/orders/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    /// Required by the server when `status` is a merchant rejection.
    pub reject_reason: Option<String>,
}

impl AuthRecord {
    /// Whether this record represents a usable session.
    ///
    /// A record with an empty or whitespace token is treated as absent
    /// everywhere, matching the store's read behavior.
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

impl OrderStatus {
    /// Every status, in the order the merchant status select offers them.
    pub const ALL: [Self; 5] = [
        Self::Created,
        Self::Accepted,
        Self::RejectByMerchant,
        Self::RejectByCustomer,
        Self::Delivered,
    ];

    /// Short human label for status chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Accepted => "Accepted",
            Self::Delivered => "Delivered",
            Self::RejectByCustomer => "Cancelled by you",
            Self::RejectByMerchant => "Rejected by merchant",
        }
    }

    /// The exact string the server uses for this status.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Accepted => "ACCEPTED",
            Self::Delivered => "DELIVERED",
            Self::RejectByCustomer => "REJECT_BY_CUSTOMER",
            Self::RejectByMerchant => "REJECT_BY_MERCHANT",
        }
    }

    /// Parse a wire-name string back into a status (for `<select>` values).
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.wire_name() == name)
    }
}
