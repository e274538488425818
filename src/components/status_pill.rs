//! Colored chip showing an order's lifecycle status.

use leptos::prelude::*;

use crate::net::types::OrderStatus;

/// Class modifier for a status, used to pick the chip color.
fn status_modifier(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Created => "created",
        OrderStatus::Accepted => "accepted",
        OrderStatus::Delivered => "delivered",
        OrderStatus::RejectByCustomer => "cancelled",
        OrderStatus::RejectByMerchant => "rejected",
    }
}

/// A small status chip. Color tracks the status modifier class.
#[component]
pub fn StatusPill(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "status-pill status-pill--{}",
            status_modifier(status),
        )>{status.label()}</span>
    }
}

#[cfg(test)]
#[path = "status_pill_test.rs"]
mod status_pill_test;
