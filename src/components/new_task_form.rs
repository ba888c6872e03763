//! New Task Form Component
//!
//! Text field and submit button for appending tasks.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for adding a task to the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add(&new_text.get_untracked());
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get_untracked() {
            if let Err(e) = input.focus() {
                log::debug!("[FORM] Could not refocus task input: {:?}", e);
            }
        }
    };

    view! {
        <form id="todo-form" class="new-task-form" on:submit=add_task>
            <span class="prompt">">"</span>
            <input
                id="todo-input"
                type="text"
                autocomplete="off"
                placeholder="Enter new task..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"[add]"</button>
        </form>
    }
}
