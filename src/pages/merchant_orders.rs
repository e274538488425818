//! DESIGN
//! ======
//! Incoming-order management for merchants. Every row carries its own
//! status/reason draft so edits to one order never disturb another; the
//! page owns the shared pieces (order list, save-in-flight id, error slot).
//!
//! A reject reason is required exactly when the merchant rejects, and it is
//! stripped from the payload for every other status so stale text from an
//! earlier draft cannot leak into the update.

use leptos::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::components::status_pill::StatusPill;
use crate::net::api;
use crate::net::types::{Order, OrderStatus, UpdateOrderStatusRequest};
use crate::util::{auth, format};

/// Dropdown wording. The wire names stay SCREAMING_SNAKE_CASE; the select
/// shows them with spaces so merchants read words, not identifiers.
fn select_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Created => "CREATED",
        OrderStatus::Accepted => "ACCEPTED",
        OrderStatus::RejectByMerchant => "REJECT BY MERCHANT",
        OrderStatus::RejectByCustomer => "REJECT BY CUSTOMER",
        OrderStatus::Delivered => "DELIVERED",
    }
}

/// Builds the status-update payload from a row draft. Rejecting as the
/// merchant demands a non-blank reason; any other status sends none.
fn build_update(
    status: OrderStatus,
    reason: &str,
) -> Result<UpdateOrderStatusRequest, &'static str> {
    let reject_reason = if status == OrderStatus::RejectByMerchant {
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err("Please provide a reject reason.");
        }
        Some(trimmed.to_owned())
    } else {
        None
    };
    Ok(UpdateOrderStatusRequest {
        status,
        reject_reason,
    })
}

#[component]
pub fn MerchantOrdersPage() -> impl IntoView {
    let session = auth::use_session();

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let saving_id = RwSignal::new(None::<i64>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(record) = session.get_untracked().record else {
                return;
            };
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_merchant_orders(&record).await {
                    Ok(list) => {
                        orders.try_set(list);
                        error.try_set(None);
                    }
                    Err(e) => {
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
        if !session.get().is_merchant() {
            return;
        }
        requested.set(true);
        load();
    });

    let on_save = Callback::new(move |(order_id, status, reason): (i64, OrderStatus, String)| {
        let request = match build_update(status, &reason) {
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
        saving_id.set(Some(order_id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_order_status(&record, order_id, &request).await {
                Ok(()) => load(),
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
            saving_id.try_set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, request);
            saving_id.set(None);
        }
    });

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_merchant()
            fallback=move || {
                view! {
                    <div class="merchant-orders-page">
                        {move || {
                            if session.get().loading {
                                view! {
                                    <p class="merchant-orders-page__status">"Loading..."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <AccessDenied message="Only merchants can view orders." />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                }
            }
        >
            <div class="merchant-orders-page">
                <header class="merchant-orders-page__head">
                    <h1 class="merchant-orders-page__title">"Incoming Orders"</h1>
                    <p class="merchant-orders-page__subtitle">
                        "Review each order and move it through its lifecycle."
                    </p>
                </header>

                {move || {
                    error
                        .get()
                        .map(|text| view! { <p class="merchant-orders-page__error">{text}</p> })
                }}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="merchant-orders-page__status">"Loading..."</p> }
                >
                    <Show
                        when=move || !orders.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="merchant-orders-page__empty">"You have no orders yet."</p>
                            }
                        }
                    >
                        <ul class="merchant-orders-page__list">
                            <For
                                each=move || orders.get()
                                key=|order| order.order_id
                                let:order
                            >
                                <MerchantOrderRow order=order saving_id=saving_id on_save=on_save />
                            </For>
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

/// One incoming order with its status dropdown and reason draft.
#[component]
fn MerchantOrderRow(
    order: Order,
    saving_id: RwSignal<Option<i64>>,
    on_save: Callback<(i64, OrderStatus, String)>,
) -> impl IntoView {
    let order_id = order.order_id;
    let chosen = RwSignal::new(order.status);
    let reason = RwSignal::new(order.reject_reason.clone().unwrap_or_default());

    let saving = move || saving_id.get() == Some(order_id);
    let needs_reason = move || chosen.get() == OrderStatus::RejectByMerchant;

    let created = order.created_at.clone();
    let total = format::format_usd(order.total_amount);

    view! {
        <li class="merchant-order-row">
            <div class="merchant-order-row__info">
                <span class="merchant-order-row__product">{order.product_name.clone()}</span>
                <StatusPill status=order.status />
                <span class="merchant-order-row__figures">
                    "Count: " {order.count} " | Total: " {total}
                </span>
                {created
                    .map(|raw| {
                        view! {
                            <span class="merchant-order-row__created">
                                "Created: " {format::display_date_time(&raw)}
                            </span>
                        }
                    })}
                {order
                    .reject_reason
                    .clone()
                    .map(|text| {
                        view! {
                            <span class="merchant-order-row__prev-reason">
                                "Prev Reason: " {text}
                            </span>
                        }
                    })}
            </div>
            <div class="merchant-order-row__actions">
                <label class="merchant-order-row__label">"Status"</label>
                <select
                    class="merchant-order-row__select"
                    on:change=move |ev| {
                        if let Some(next) = OrderStatus::from_wire_name(&event_target_value(&ev)) {
                            chosen.set(next);
                        }
                    }
                >
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.wire_name()
                                    selected=move || chosen.get() == status
                                >
                                    {select_label(status)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <label class="merchant-order-row__label">
                    "Reject Reason "
                    <span class="merchant-order-row__label-hint">"(only when rejecting)"</span>
                </label>
                <input
                    class="merchant-order-row__reason"
                    type="text"
                    placeholder="Reason if rejected"
                    disabled=move || !needs_reason()
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary merchant-order-row__save"
                    disabled=saving
                    on:click=move |_| on_save.run((order_id, chosen.get(), reason.get()))
                >
                    {move || if saving() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
#[path = "merchant_orders_test.rs"]
mod merchant_orders_test;
