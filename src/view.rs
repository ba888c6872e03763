//! View Description
//!
//! Pure mapping from list state to what the page shows. Components read the
//! resulting `ListView` through a `reactive_stores` store and never look at
//! `ListState` directly.

use reactive_stores::Store;

use crate::models::{ListState, Task, DEFAULT_LIST_NAME};

/// Transient UI marks that are not part of the persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewMarks<'a> {
    /// Task added since the previous render
    pub just_added: Option<&'a str>,
    /// Task whose text is being edited inline
    pub editing: Option<&'a str>,
    /// Overwrite the name field (after load and import only)
    pub sync_list_name: bool,
}

/// Everything the page needs to draw the list
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ListView {
    /// New value for the list name field, `None` leaves the field as typed
    pub list_name_input: Option<String>,
    /// Show the empty-state indicator
    pub empty: bool,
    pub rows: Vec<TaskRow>,
}

/// One rendered task
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub just_added: bool,
    pub editing: bool,
}

impl TaskRow {
    fn from_task(task: &Task, marks: &ViewMarks<'_>) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            completed: task.completed,
            just_added: marks.just_added == Some(task.id.as_str()),
            editing: marks.editing == Some(task.id.as_str()),
        }
    }

    pub fn row_class(&self) -> &'static str {
        if self.just_added {
            "task-item animate-slide-down"
        } else {
            "task-item"
        }
    }

    pub fn checkbox_class(&self) -> &'static str {
        if self.completed {
            "todo-toggle checkbox checked"
        } else {
            "todo-toggle checkbox"
        }
    }

    pub fn text_class(&self) -> &'static str {
        if self.completed {
            "task-text task-completed"
        } else {
            "task-text"
        }
    }

    pub fn check_mark(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            ""
        }
    }
}

/// What the name field should show for a list name
pub fn list_name_input(list_name: &str) -> String {
    if list_name == DEFAULT_LIST_NAME {
        String::new()
    } else {
        list_name.to_string()
    }
}

/// Build the view for `state`
pub fn build(state: &ListState, marks: &ViewMarks<'_>) -> ListView {
    ListView {
        list_name_input: marks
            .sync_list_name
            .then(|| list_name_input(&state.list_name)),
        empty: state.tasks.is_empty(),
        rows: state
            .tasks
            .iter()
            .map(|task| TaskRow::from_task(task, marks))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListState {
        ListState::new(
            "chores",
            vec![
                Task::new("1".into(), "sweep".into()),
                Task {
                    id: "2".into(),
                    text: "dishes".into(),
                    completed: true,
                },
            ],
        )
    }

    #[test]
    fn test_empty_state_shows_indicator() {
        let view = build(&ListState::default(), &ViewMarks::default());

        assert!(view.empty);
        assert!(view.rows.is_empty());
        assert_eq!(view.list_name_input, None);
    }

    #[test]
    fn test_rows_follow_task_order_and_marks() {
        let marks = ViewMarks {
            just_added: Some("2"),
            editing: Some("1"),
            sync_list_name: true,
        };
        let view = build(&sample(), &marks);

        assert!(!view.empty);
        assert_eq!(view.list_name_input.as_deref(), Some("chores"));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, "1");
        assert!(view.rows[0].editing);
        assert!(!view.rows[0].just_added);
        assert!(view.rows[1].just_added);
        assert_eq!(view.rows[1].row_class(), "task-item animate-slide-down");
    }

    #[test]
    fn test_default_name_syncs_as_blank_field() {
        let marks = ViewMarks {
            sync_list_name: true,
            ..ViewMarks::default()
        };
        let view = build(&ListState::default(), &marks);

        assert_eq!(view.list_name_input.as_deref(), Some(""));
    }

    #[test]
    fn test_completed_row_attributes() {
        let view = build(&sample(), &ViewMarks::default());

        assert_eq!(view.rows[0].check_mark(), "");
        assert_eq!(view.rows[0].text_class(), "task-text");
        assert_eq!(view.rows[1].check_mark(), "✓");
        assert_eq!(view.rows[1].text_class(), "task-text task-completed");
    }
}
