//! Pastebin Frontend App
//!
//! Root component: owns the paste snapshot and wires the view together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::backend::HostBackend;
use crate::components::{ErrorBanner, NewPasteForm, PasteDetail, PasteList};
use crate::context::AppContext;
use crate::error::BackendError;
use crate::models::{Paste, PasteId};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (pastes, set_pastes) = signal(Vec::<Paste>::new());
    let (loading, set_loading) = signal(true);
    let (selected_paste, set_selected_paste) = signal::<Option<PasteId>>(None);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<BackendError>>(None);

    // Provide context to all children
    let ctx = AppContext::new((submitting, set_submitting), (error, set_error));
    provide_context(ctx);

    // Initial load. The view renders empty until the list call resolves;
    // the snapshot is only ever replaced wholesale with the backend result.
    Effect::new(move |_| {
        spawn_local(async move {
            match actions::refresh(&HostBackend).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[App] Loaded {} pastes", loaded.len()).into(),
                    );
                    set_pastes.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[App] Initial load failed: {}", e).into(),
                    );
                    ctx.report_error(e);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <main class="container">
            <header>
                <h1>"Pastebin"</h1>
            </header>

            <ErrorBanner />

            <NewPasteForm set_pastes=set_pastes />

            <div class="content-row">
                <PasteList
                    pastes=pastes
                    loading=loading
                    selected_paste=selected_paste
                    set_selected_paste=set_selected_paste
                />
                <PasteDetail
                    selected_paste=selected_paste
                    set_selected_paste=set_selected_paste
                />
            </div>

            <p class="paste-count">{move || format!("{} pastes", pastes.get().len())}</p>
        </main>
    }
}
