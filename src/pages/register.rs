//! Registration page for new customer and merchant accounts.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{AccountType, RegisterRequest};
use crate::util::auth;

/// Builds the request payload or explains what is missing. Merchants must
/// name a company; the field is dropped entirely for customers.
fn validate(
    username: &str,
    password: &str,
    name: &str,
    surname: &str,
    account_type: AccountType,
    company_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let name = name.trim();
    let surname = surname.trim();
    if username.is_empty() || name.is_empty() || surname.is_empty() {
        return Err("Fill in username, name, and surname.");
    }
    if password.chars().count() < 5 {
        return Err("Password must be at least 5 characters.");
    }
    let company_name = match account_type {
        AccountType::Merchant => {
            let trimmed = company_name.trim();
            if trimmed.is_empty() {
                return Err("Company name is required for merchant accounts.");
            }
            Some(trimmed.to_owned())
        }
        AccountType::Customer => None,
    };
    Ok(RegisterRequest {
        username: username.to_owned(),
        password: password.to_owned(),
        name: name.to_owned(),
        surname: surname.to_owned(),
        account_type,
        company_name,
    })
}

fn register_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } => {
            "Registration failed. Please check fields and try again.".to_owned()
        }
        other => other.user_message(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = auth::use_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let account_type = RwSignal::new(AccountType::Customer);
    let company_name = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        let request = match validate(
            &username.get(),
            &password.get(),
            &name.get(),
            &surname.get(),
            account_type.get(),
            &company_name.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(record) => {
                    auth::login(session, &record);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    error.try_set(Some(register_error_message(&e)));
                    busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create your account"</h1>
                <p class="register-card__subtitle">"It takes less than a minute."</p>
                <Show when=move || error.get().is_some()>
                    <p class="register-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="register-form" on:submit=on_submit>
                    <div class="register-form__row">
                        <label class="register-form__field">
                            "Name"
                            <input
                                class="register-input"
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="register-form__field">
                            "Surname"
                            <input
                                class="register-input"
                                type="text"
                                placeholder="Surname"
                                prop:value=move || surname.get()
                                on:input=move |ev| surname.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="register-form__field">
                        "Username"
                        <input
                            class="register-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__field">
                        "Password"
                        <div class="register-form__password">
                            <input
                                class="register-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="btn register-form__reveal"
                                type="button"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <div class="register-form__row">
                        <label class="register-form__field">
                            "Account Type"
                            <select
                                class="register-input"
                                on:change=move |ev| {
                                    let merchant = event_target_value(&ev) == "MERCHANT";
                                    account_type
                                        .set(
                                            if merchant {
                                                AccountType::Merchant
                                            } else {
                                                AccountType::Customer
                                            },
                                        );
                                }
                            >
                                <option
                                    value="CUSTOMER"
                                    selected=move || account_type.get() == AccountType::Customer
                                >
                                    "Customer"
                                </option>
                                <option
                                    value="MERCHANT"
                                    selected=move || account_type.get() == AccountType::Merchant
                                >
                                    "Merchant"
                                </option>
                            </select>
                        </label>
                        <Show when=move || account_type.get() == AccountType::Merchant>
                            <label class="register-form__field">
                                "Company Name"
                                <input
                                    class="register-input"
                                    type="text"
                                    placeholder="Your company"
                                    prop:value=move || company_name.get()
                                    on:input=move |ev| company_name.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>
                    </div>
                    <button
                        class="register-button"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating…" } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;
