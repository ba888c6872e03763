//! List Header Component
//!
//! List name field plus export and import controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::browser;
use crate::context::use_app_context;
use crate::view::ListViewStoreFields;

#[component]
pub fn ListHeader() -> impl IntoView {
    let ctx = use_app_context();
    let name_ref = NodeRef::<leptos::html::Input>::new();

    // Only load and import rewrite the field; renames are left as typed
    Effect::new(move |_| {
        if let (Some(name), Some(input)) = (ctx.view.list_name_input().get(), name_ref.get()) {
            input.set_value(&name);
        }
    });

    let on_import = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // Current list stays on screen until the file has been read
        spawn_local(async move {
            match browser::read_file(file).await {
                Ok(raw) => {
                    if ctx.import(&raw) {
                        // Allow picking the same file again
                        input.set_value("");
                    }
                }
                Err(e) => ctx.reject_import(&e),
            }
        });
    };

    view! {
        <header class="list-header">
            <input
                id="list-name-input"
                type="text"
                placeholder="cyber_state"
                aria-label="List name"
                node_ref=name_ref
                on:input=move |ev| ctx.set_list_name(&event_target_value(&ev))
            />
            <div class="list-actions">
                <button id="btn-save" type="button" on:click=move |_| ctx.export()>
                    "[export]"
                </button>
                <label class="import-btn">
                    "[import]"
                    <input
                        id="file-upload"
                        type="file"
                        accept=".json,application/json"
                        class="hidden"
                        on:change=on_import
                    />
                </label>
            </div>
        </header>
    }
}
