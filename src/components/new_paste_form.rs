//! New Paste Form Component
//!
//! Multiline content input with a guarded submit control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::backend::HostBackend;
use crate::context::AppContext;
use crate::models::Paste;

/// Form for submitting new paste content
#[component]
pub fn NewPasteForm(set_pastes: WriteSignal<Vec<Paste>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (content, set_content) = signal(String::new());

    let create_paste = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        // Empty submissions are silently ignored, not an error
        if text.is_empty() {
            return;
        }
        // One round trip at a time
        if !ctx.begin_submit() {
            return;
        }

        spawn_local(async move {
            match actions::submit(&HostBackend, &text).await {
                Ok(Some(refreshed)) => {
                    set_content.set(String::new());
                    ctx.clear_error();
                    set_pastes.set(refreshed);
                }
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[NewPasteForm] Submit failed: {}", e).into(),
                    );
                    ctx.report_error(e);
                }
            }
            ctx.end_submit();
        });
    };

    view! {
        <form class="paste-form" on:submit=create_paste>
            <label for="content">"Enter your paste content:"</label>
            <textarea
                id="content"
                class="textarea"
                placeholder="Paste text here..."
                prop:value=move || content.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_content.set(input.value());
                }
            ></textarea>
            <button
                type="submit"
                class="submit-button"
                prop:disabled=move || ctx.submitting.get()
            >
                {move || if ctx.submitting.get() { "Submitting..." } else { "Create Paste" }}
            </button>
        </form>
    }
}
