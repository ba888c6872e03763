//! Snapshot Codec
//!
//! Reads and writes the JSON form of a `ListState`. Two shapes are accepted on
//! read: the current `{ "listName": .., "tasks": [..] }` object and the legacy
//! bare array of tasks. Files from the first release used `todos` for the task
//! array and sometimes numeric ids; both are still understood.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{ListError, ListResult};
use crate::models::{ListState, Task, DEFAULT_LIST_NAME};

/// Parse raw JSON text into a validated list state
pub fn parse(raw: &str) -> ListResult<ListState> {
    let value: Value = serde_json::from_str(raw)?;
    decode(value)
}

/// Decode an already-parsed JSON value
pub fn decode(value: Value) -> ListResult<ListState> {
    let (list_name, records) = match value {
        Value::Array(records) => (None, records),
        Value::Object(mut map) => {
            let name = match map.remove("listName") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            };
            (name, take_records(&mut map)?)
        }
        other => {
            return Err(ListError::InvalidFormat(format!(
                "expected an object or array, found {}",
                kind(&other)
            )))
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let task = decode_task(index, record)?;
        if !seen.insert(task.id.clone()) {
            return Err(ListError::InvalidFormat(format!(
                "duplicate task id {:?}",
                task.id
            )));
        }
        tasks.push(task);
    }

    Ok(ListState::new(
        list_name.unwrap_or_else(|| DEFAULT_LIST_NAME.to_string()),
        tasks,
    ))
}

/// Serialize a state the way it is offered for download
pub fn to_pretty_json(state: &ListState) -> ListResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Download filename for a list: `<slug>.json`
pub fn export_filename(list_name: &str) -> String {
    // One `_` per UTF-16 unit, so astral characters become `__`
    let slug: String = list_name
        .trim()
        .encode_utf16()
        .map(|unit| match u8::try_from(unit) {
            Ok(b) if b.is_ascii_alphanumeric() => char::from(b.to_ascii_lowercase()),
            _ => '_',
        })
        .collect();

    if slug.is_empty() {
        format!("{}.json", DEFAULT_LIST_NAME)
    } else {
        format!("{}.json", slug)
    }
}

fn take_records(map: &mut Map<String, Value>) -> ListResult<Vec<Value>> {
    let records = match map.remove("tasks") {
        Some(value) => value,
        None => map.remove("todos").unwrap_or(Value::Null),
    };

    match records {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        other => Err(ListError::InvalidFormat(format!(
            "tasks must be an array, found {}",
            kind(&other)
        ))),
    }
}

fn decode_task(index: usize, record: Value) -> ListResult<Task> {
    let Value::Object(map) = record else {
        return Err(ListError::InvalidFormat(format!(
            "task {} is not an object",
            index
        )));
    };

    let id = match map.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
        _ => {
            return Err(ListError::InvalidFormat(format!(
                "task {} has no usable id",
                index
            )))
        }
    };

    let Some(Value::String(text)) = map.get("text") else {
        return Err(ListError::InvalidFormat(format!(
            "task {} text must be a string",
            index
        )));
    };

    let Some(Value::Bool(completed)) = map.get("completed") else {
        return Err(ListError::InvalidFormat(format!(
            "task {} completed must be a boolean",
            index
        )));
    };

    Ok(Task {
        id,
        text: text.clone(),
        completed: *completed,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_shape() {
        let state =
            parse(r#"{"listName":"x","tasks":[{"id":"1","text":"a","completed":false}]}"#).unwrap();

        assert_eq!(state.list_name, "x");
        assert_eq!(state.tasks, vec![Task::new("1".into(), "a".into())]);
    }

    #[test]
    fn test_parse_legacy_array_uses_default_name() {
        let state = parse(r#"[{"id":"1","text":"a","completed":true}]"#).unwrap();

        assert_eq!(state.list_name, DEFAULT_LIST_NAME);
        assert_eq!(state.tasks.len(), 1);
        assert!(state.tasks[0].completed);
    }

    #[test]
    fn test_parse_accepts_todos_key_and_numeric_ids() {
        let state = parse(
            r#"{"listName":"old","todos":[{"id":1700000000000,"text":"a","completed":false}]}"#,
        )
        .unwrap();

        assert_eq!(state.tasks[0].id, "1700000000000");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = parse(r#"{"tasks":[{"id":"1"}]}"#).unwrap_err();
        assert!(matches!(err, ListError::InvalidFormat(_)));
    }

    #[test]
    fn test_falsy_ids_rejected() {
        assert!(parse(r#"[{"id":"","text":"a","completed":false}]"#).is_err());
        assert!(parse(r#"[{"id":0,"text":"a","completed":false}]"#).is_err());
        assert!(parse(r#"[{"id":null,"text":"a","completed":false}]"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[
            {"id":"1","text":"a","completed":false},
            {"id":"1","text":"b","completed":true}
        ]"#;
        assert!(matches!(parse(raw), Err(ListError::InvalidFormat(_))));
    }

    #[test]
    fn test_non_container_rejected() {
        assert!(matches!(parse("42"), Err(ListError::InvalidFormat(_))));
        assert!(matches!(parse("null"), Err(ListError::InvalidFormat(_))));
        assert!(matches!(parse("{not json"), Err(ListError::Parse(_))));
    }

    #[test]
    fn test_object_without_tasks_is_empty() {
        let state = parse(r#"{"listName":"  "}"#).unwrap();
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn test_export_then_parse_preserves_state() {
        let state = ListState::new(
            "Errands",
            vec![
                Task::new("10".into(), "post office".into()),
                Task {
                    id: "11".into(),
                    text: "bank".into(),
                    completed: true,
                },
            ],
        );

        let json = to_pretty_json(&state).unwrap();
        assert!(json.contains('\n'));
        assert_eq!(parse(&json).unwrap(), state);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("My List!"), "my_list_.json");
        assert_eq!(export_filename("Work2024"), "work2024.json");
        assert_eq!(export_filename(""), "cyber_state.json");
        assert_eq!(export_filename(DEFAULT_LIST_NAME), "cyber_state.json");
        assert_eq!(export_filename("café"), "caf_.json");
        assert_eq!(export_filename("go🚀"), "go__.json");
    }
}
