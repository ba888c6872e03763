//! Task Item Component
//!
//! A single task row with toggle, inline edit and delete.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id.clone();
    let toggle_id = id.clone();

    let body = if row.editing {
        let input_ref = NodeRef::<leptos::html::Input>::new();
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                if let Err(e) = input.focus() {
                    log::debug!("[ITEM] Could not focus edit input: {:?}", e);
                }
            }
        });

        let blur_id = id.clone();
        let key_id = id.clone();
        view! {
            <input
                type="text"
                class="task-edit-input"
                node_ref=input_ref
                value=row.text.clone()
                on:blur=move |ev| ctx.commit_edit(&blur_id, &event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => ctx.commit_edit(&key_id, &event_target_value(&ev)),
                        "Escape" => ctx.cancel_edit(),
                        _ => {}
                    }
                }
            />
        }
        .into_any()
    } else {
        let edit_id = id.clone();
        let delete_id = id.clone();
        view! {
            <span class=row.text_class()>{row.text.clone()}</span>
            <button
                class="todo-edit"
                aria-label="Edit task"
                title="Edit"
                on:click=move |_| ctx.begin_edit(&edit_id)
            >
                "[edit]"
            </button>
            <button
                class="todo-delete"
                aria-label="Delete task"
                title="Delete"
                on:click=move |_| ctx.delete(&delete_id)
            >
                "[del]"
            </button>
        }
        .into_any()
    };

    view! {
        <div class=row.row_class()>
            <button
                class=row.checkbox_class()
                aria-label="Toggle task"
                on:click=move |_| ctx.toggle(&toggle_id)
            >
                {row.check_mark()}
            </button>
            {body}
        </div>
    }
}
