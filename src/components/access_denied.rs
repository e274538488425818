//! Placeholder card rendered in place of a role-restricted page.

use leptos::prelude::*;

/// Static denial notice. Pages render this instead of their real content when
/// the session lacks the required role, so no data requests are issued.
#[component]
pub fn AccessDenied(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="access-denied">
            <p class="access-denied__message">{message}</p>
            <a class="access-denied__link" href="/">
                "Back to products"
            </a>
        </div>
    }
}
