//! Task List Component
//!
//! Rows for every task, or the empty-state indicator.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::view::ListViewStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.view.empty().get()>
            <div id="empty-state" class="empty-state">
                <p>"// no tasks in register"</p>
            </div>
        </Show>
        <div id="todo-list" class="task-list">
            {move || {
                ctx.view
                    .rows()
                    .get()
                    .into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()
            }}
        </div>
    }
}
