use serde::{Deserialize, Serialize};
use todo_core::Todo;

use crate::persist::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTodo {
    id: u64,
    title: String,
    #[serde(default)]
    completed: bool,
}

/// Serializes the full list as a JSON array of `{id, title, completed}`.
pub fn encode_todos(todos: &[Todo]) -> Result<String, StoreError> {
    let stored: Vec<StoredTodo> = todos
        .iter()
        .map(|todo| StoredTodo {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
        })
        .collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Parses a stored snapshot. A JSON `null` decodes to `None`.
pub fn decode_todos(text: &str) -> Result<Option<Vec<Todo>>, StoreError> {
    let stored: Option<Vec<StoredTodo>> = serde_json::from_str(text)?;
    Ok(stored.map(|list| {
        list.into_iter()
            .map(|todo| Todo {
                id: todo.id,
                title: todo.title,
                completed: todo.completed,
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_plain_json_array() {
        let todos = vec![Todo {
            id: 3,
            title: "Walk".to_string(),
            completed: true,
        }];
        assert_eq!(
            encode_todos(&todos).unwrap(),
            r#"[{"id":3,"title":"Walk","completed":true}]"#
        );
    }

    #[test]
    fn null_and_missing_completed_are_accepted() {
        assert_eq!(decode_todos("null").unwrap(), None);

        let decoded = decode_todos(r#"[{"id":1,"title":"a"}]"#).unwrap().unwrap();
        assert!(!decoded[0].completed);
    }

    #[test]
    fn garbage_is_a_codec_error() {
        assert!(matches!(decode_todos("{not json"), Err(StoreError::Codec(_))));
        assert!(matches!(decode_todos(""), Err(StoreError::Codec(_))));
    }
}
