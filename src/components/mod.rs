//! UI Components
//!
//! Leptos components that draw the `ListView` and forward user actions to
//! the list manager.

mod list_header;
mod new_task_form;
mod task_item;
mod task_list;

pub use list_header::ListHeader;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
