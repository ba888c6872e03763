//! Terminall App
//!
//! Root component: list header, new task form and the task list.

use leptos::prelude::*;

use crate::components::{ListHeader, NewTaskForm, TaskList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Restore the saved list once on mount
    Effect::new(move |_| ctx.load());

    view! {
        <main class="terminal">
            <h1>"terminall"</h1>
            <ListHeader />
            <NewTaskForm />
            <TaskList />
        </main>
    }
}
