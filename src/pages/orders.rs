//! Customer orders page: order list, status pills, and the cancel flow.
//!
//! DESIGN
//! ======
//! Which statuses may still be cancelled is configuration, not scattered
//! conditionals: row logic asks `can_cancel`, and the set lives in one
//! const next to it. Today that set is "not delivered, not already
//! rejected".

use leptos::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::components::status_pill::StatusPill;
use crate::net::api;
use crate::net::types::{CancelOrderRequest, Order, OrderStatus};
use crate::util::auth;
use crate::util::format;

/// Statuses a customer may still cancel from.
pub const CANCELLABLE_STATUSES: [OrderStatus; 2] =
    [OrderStatus::Created, OrderStatus::Accepted];

fn can_cancel(status: OrderStatus) -> bool {
    CANCELLABLE_STATUSES.contains(&status)
}

/// The server requires a non-blank reason; whitespace does not count.
fn cancel_reason(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Orders page. Customer-only; also hosts the checkout shortcut that turns
/// the current cart into orders.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = auth::use_session();

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // One cancel panel open at a time; opening another row moves it.
    let cancel_for = RwSignal::new(None::<i64>);
    let reason = RwSignal::new(String::new());

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(record) = session.get_untracked().record else {
                return;
            };
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_orders(&record).await {
                    Ok(list) => {
                        orders.try_set(list);
                        error.try_set(None);
                    }
                    Err(e) => {
                        orders.try_set(Vec::new());
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

    let on_checkout = move |_| {
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::checkout(&record).await {
                Ok(()) => {
                    notice.try_set(Some("Checkout successful, orders created!".to_owned()));
                    load();
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = record;
    };

    let on_confirm_cancel = Callback::new(move |order_id: i64| {
        let Some(text) = cancel_reason(&reason.get()) else {
            error.set(Some("Please write a reason to cancel.".to_owned()));
            return;
        };
        let Some(record) = session.get().record else {
            return;
        };
        error.set(None);
        notice.set(None);
        let request = CancelOrderRequest { reason: text };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::cancel_order(&record, order_id, &request).await {
                Ok(()) => {
                    reason.try_set(String::new());
                    cancel_for.try_set(None);
                    notice.try_set(Some("Order cancelled.".to_owned()));
                    load();
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (record, request);
    });

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_customer()
            fallback=move || {
                view! {
                    <div class="orders-page">
                        {move || {
                            if session.get().loading {
                                view! { <p class="orders-page__status">"Loading..."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <AccessDenied message="Only customers can view orders." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="orders-page">
                <div class="orders-page__header">
                    <div>
                        <h1 class="orders-page__title">"My Orders"</h1>
                        <p class="orders-page__subtitle">"Orders created from your cart"</p>
                    </div>
                    <button class="btn btn--primary orders-page__checkout" on:click=on_checkout>
                        "Checkout (Create new Order)"
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="orders-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="orders-page__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="orders-page__status">"Loading..."</p> }
                >
                    <Show
                        when=move || !orders.get().is_empty()
                        fallback=move || {
                            view! { <p class="orders-page__empty">"You have no orders yet."</p> }
                        }
                    >
                        <ul class="orders-page__list">
                            {move || {
                                orders
                                    .get()
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <OrderRow
                                                order=order
                                                cancel_for=cancel_for
                                                reason=reason
                                                on_confirm=on_confirm_cancel
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

/// One order line with its cancel affordance.
#[component]
fn OrderRow(
    order: Order,
    cancel_for: RwSignal<Option<i64>>,
    reason: RwSignal<String>,
    on_confirm: Callback<i64>,
) -> impl IntoView {
    let order_id = order.order_id;
    let cancellable = can_cancel(order.status);
    let expanded = move || cancel_for.get() == Some(order_id);
    let placed = order.created_at.as_deref().map(format::display_date_time);
    let total = format::format_usd(order.total_amount);

    let open = move |_| {
        reason.set(String::new());
        cancel_for.set(Some(order_id));
    };
    let close = move |_| cancel_for.set(None);

    view! {
        <li class="order-row">
            <div class="order-row__info">
                <div class="order-row__headline">
                    <h3 class="order-row__product">{order.product_name.clone()}</h3>
                    <StatusPill status=order.status />
                </div>
                <div class="order-row__figures">
                    <span class="order-row__count">"Count: " {order.count}</span>
                    <span class="order-row__total">"Total: " {total}</span>
                </div>
                {placed
                    .map(|date| {
                        view! { <span class="order-row__placed">"Placed: " {date}</span> }
                    })}
                {order
                    .reject_reason
                    .clone()
                    .map(|text| {
                        view! { <span class="order-row__reject-reason">"Reason: " {text}</span> }
                    })}
            </div>
            <div class="order-row__actions">
                {if cancellable {
                    view! {
                        <Show
                            when=expanded
                            fallback=move || {
                                view! {
                                    <button class="btn order-row__cancel" on:click=open>
                                        "Cancel order"
                                    </button>
                                }
                            }
                        >
                            <div class="order-row__cancel-panel">
                                <span class="order-row__cancel-hint">
                                    "Please provide a reason to cancel:"
                                </span>
                                <input
                                    class="order-row__reason"
                                    type="text"
                                    placeholder="Reason to cancel…"
                                    prop:value=move || reason.get()
                                    on:input=move |ev| reason.set(event_target_value(&ev))
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            on_confirm.run(order_id);
                                        }
                                        if ev.key() == "Escape" {
                                            cancel_for.set(None);
                                        }
                                    }
                                />
                                <div class="order-row__cancel-actions">
                                    <button
                                        class="btn btn--danger order-row__confirm"
                                        disabled=move || reason.get().trim().is_empty()
                                        on:click=move |_| on_confirm.run(order_id)
                                    >
                                        "Confirm cancel"
                                    </button>
                                    <button class="btn order-row__keep" on:click=close>
                                        "Keep order"
                                    </button>
                                </div>
                                <span class="order-row__tip">
                                    "Tip: press Enter to confirm or Esc to close."
                                </span>
                            </div>
                        </Show>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="order-row__locked">"This order can't be cancelled."</span>
                    }
                        .into_any()
                }}
            </div>
        </li>
    }
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;
