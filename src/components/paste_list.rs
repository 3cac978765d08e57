//! Paste List Component
//!
//! Read-only keyed projection of the paste snapshot.

use leptos::prelude::*;

use crate::format::format_timestamp;
use crate::models::{Paste, PasteId};

#[component]
pub fn PasteList(
    pastes: ReadSignal<Vec<Paste>>,
    loading: ReadSignal<bool>,
    selected_paste: ReadSignal<Option<PasteId>>,
    set_selected_paste: WriteSignal<Option<PasteId>>,
) -> impl IntoView {
    view! {
        <section class="paste-list">
            <h2>"Pastes:"</h2>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <ul>
                <For
                    each=move || pastes.get()
                    key=|paste| paste.id
                    children=move |paste| {
                        let id = paste.id;
                        let content = paste.content.clone();
                        let created = format_timestamp(paste.timestamp);
                        let is_selected = move || selected_paste.get() == Some(id);
                        view! {
                            <li
                                class="paste-item"
                                class:selected=is_selected
                                on:click=move |_| set_selected_paste.set(Some(id))
                            >
                                <strong>"ID: "</strong> {id} <br/>
                                <strong>"Content: "</strong> {content}
                                <span class="paste-meta">{created}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
