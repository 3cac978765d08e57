//! Error Banner Component
//!
//! Visible error branch for failed backend round trips.

use leptos::prelude::*;

use crate::context::AppContext;

/// Banner showing the last backend failure, with a dismiss control
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error.get().map(|err| view! {
            <div class="error-banner">
                <span class="error-text">{err.to_string()}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>
                    "×"
                </button>
            </div>
        })}
    }
}
