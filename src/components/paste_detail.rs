//! Paste Detail Column
//!
//! Side column showing one selected paste, fetched by id. Lookup failures
//! render inline here rather than in the global banner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::backend::HostBackend;
use crate::format::format_timestamp;
use crate::models::{Paste, PasteId};

#[component]
pub fn PasteDetail(
    selected_paste: ReadSignal<Option<PasteId>>,
    set_selected_paste: WriteSignal<Option<PasteId>>,
) -> impl IntoView {
    let (paste, set_paste) = signal(None::<Paste>);
    let (load_error, set_load_error) = signal(None::<String>);

    Effect::new(move |_| {
        match selected_paste.get() {
            Some(id) => {
                spawn_local(async move {
                    match actions::load_detail(&HostBackend, id).await {
                        Ok(found) => {
                            set_load_error.set(None);
                            set_paste.set(Some(found));
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[PasteDetail] Lookup failed: {}", e).into(),
                            );
                            set_paste.set(None);
                            set_load_error.set(Some(e.to_string()));
                        }
                    }
                });
            }
            None => {
                set_paste.set(None);
                set_load_error.set(None);
            }
        }
    });

    view! {
        <Show when=move || selected_paste.get().is_some()>
            <aside class="paste-detail">
                <div class="paste-detail-header">
                    <h2>"Paste"</h2>
                    <button
                        class="close-btn"
                        on:click=move |_| set_selected_paste.set(None)
                    >
                        "×"
                    </button>
                </div>

                {move || load_error.get().map(|msg| view! {
                    <p class="detail-error">{msg}</p>
                })}

                {move || paste.get().map(|p| view! {
                    <div class="paste-detail-body">
                        <p class="paste-meta">
                            "#" {p.id} " · " {format_timestamp(p.timestamp)}
                        </p>
                        <pre class="paste-content">{p.content}</pre>
                    </div>
                })}
            </aside>
        </Show>
    }
}
