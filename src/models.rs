//! Frontend Models
//!
//! Task records and the named list that is persisted, exported and imported.

use serde::{Deserialize, Serialize};

/// Name used when the user leaves the list name blank
pub const DEFAULT_LIST_NAME: &str = "cyber_state";

/// localStorage key holding the current snapshot
pub const STORAGE_KEY: &str = "terminall-todos";

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// The named, ordered task collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    #[serde(rename = "listName")]
    pub list_name: String,
    pub tasks: Vec<Task>,
}

impl ListState {
    pub fn new(list_name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            list_name: normalize_list_name(&list_name.into()),
            tasks,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// Trim a user-supplied list name, falling back to the default when blank
pub fn normalize_list_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_LIST_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_falls_back_to_default() {
        assert_eq!(normalize_list_name("   "), DEFAULT_LIST_NAME);
        assert_eq!(normalize_list_name(""), DEFAULT_LIST_NAME);
        assert_eq!(normalize_list_name("  groceries "), "groceries");
    }

    #[test]
    fn test_state_serializes_with_camel_case_name() {
        let state = ListState::new("work", vec![Task::new("1".into(), "a".into())]);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["listName"], "work");
        assert_eq!(json["tasks"][0]["id"], "1");
        assert_eq!(json["tasks"][0]["completed"], false);
    }
}
