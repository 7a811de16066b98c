use std::collections::HashSet;

use todo_core::{seed_todos, sort_newest_first, Todo};
use todo_logging::{todo_debug, todo_error, todo_info, todo_warn};

use crate::codec::{decode_todos, encode_todos};
use crate::kv::KeyValueStore;
use crate::persist::StoreError;

/// Storage key the list lives under.
pub const STORAGE_KEY: &str = "TodoApp";

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTodos {
    pub todos: Vec<Todo>,
    /// The snapshot exists but could not be read or parsed; `todos` is the
    /// seed list and must not be written over it.
    pub read_failed: bool,
}

/// The to-do list's single persistence slot.
pub struct TodoStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> TodoStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, STORAGE_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Reads the stored list as-is. `Ok(None)` when nothing was stored.
    pub fn try_load(&self) -> Result<Option<Vec<Todo>>, StoreError> {
        match self.kv.get_item(&self.key)? {
            Some(text) => decode_todos(&text),
            None => Ok(None),
        }
    }

    /// Startup load: stored list, or the seed list when storage is empty or
    /// unreadable. Always sorted newest first; never fails.
    pub fn load(&self) -> LoadedTodos {
        let (stored, read_failed) = match self.try_load() {
            Ok(stored) => (stored, false),
            Err(err) => {
                todo_warn!("Failed to load todos from key {:?}: {}", self.key, err);
                (None, true)
            }
        };

        let mut todos = match stored {
            Some(list) if !list.is_empty() => {
                todo_info!("Loaded {} todos from key {:?}", list.len(), self.key);
                list
            }
            _ => {
                todo_info!("No stored todos under {:?}; using seed list", self.key);
                seed_todos()
            }
        };
        sort_newest_first(&mut todos);
        drop_duplicate_ids(&mut todos);
        LoadedTodos { todos, read_failed }
    }

    /// Overwrites the stored snapshot with `todos`.
    ///
    /// Failures are logged here; the caller may ignore the result.
    pub fn persist(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let result = encode_todos(todos).and_then(|json| self.kv.set_item(&self.key, &json));
        match &result {
            Ok(()) => todo_debug!("Persisted {} todos under {:?}", todos.len(), self.key),
            Err(err) => todo_error!("Failed to persist todos under {:?}: {}", self.key, err),
        }
        result
    }
}

fn drop_duplicate_ids(todos: &mut Vec<Todo>) {
    let mut seen = HashSet::with_capacity(todos.len());
    let before = todos.len();
    todos.retain(|todo| seen.insert(todo.id));
    if todos.len() != before {
        todo_warn!(
            "Dropped {} stored todos with duplicate ids",
            before - todos.len()
        );
    }
}
