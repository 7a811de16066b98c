use todo_logging::todo_warn;

use crate::view_model::{AppViewModel, TodoRowView};
use crate::ColorScheme;

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Sort a loaded list the way it is shown: highest id first.
pub fn sort_newest_first(todos: &mut [Todo]) {
    todos.sort_by(|a, b| b.id.cmp(&a.id));
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    todos: Vec<Todo>,
    input: String,
    color_scheme: ColorScheme,
    loaded: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the preferred scheme, e.g. from configuration.
    pub fn with_color_scheme(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            todos: self
                .todos
                .iter()
                .map(|todo| TodoRowView {
                    id: todo.id,
                    title: todo.title.clone(),
                    completed: todo.completed,
                })
                .collect(),
            input: self.input.clone(),
            color_scheme: self.color_scheme,
            todo_count: self.todos.len(),
            completed_count: self.todos.iter().filter(|todo| todo.completed).count(),
            loaded: self.loaded,
            dirty: self.dirty,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Full copy of the list, as handed to persistence.
    pub fn todos_snapshot(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Whether the startup load has been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_todos(&mut self, mut todos: Vec<Todo>) {
        sort_newest_first(&mut todos);
        self.todos = todos;
        self.loaded = true;
        self.mark_dirty();
    }

    /// Prepends a new record built from the current input.
    ///
    /// Returns `false` and leaves the input untouched when it is blank or no
    /// id above the current maximum is left.
    pub(crate) fn add_from_input(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let Some(id) = self.next_id() else {
            todo_warn!("No todo id left above {}; add refused", TodoId::MAX);
            return false;
        };
        let title = std::mem::take(&mut self.input);
        self.todos.insert(
            0,
            Todo {
                id,
                title,
                completed: false,
            },
        );
        self.mark_dirty();
        true
    }

    pub(crate) fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        let removed = self.todos.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub(crate) fn toggle_color_scheme(&mut self) {
        self.color_scheme = self.color_scheme.toggled();
        self.mark_dirty();
    }

    fn next_id(&self) -> Option<TodoId> {
        self.todos
            .iter()
            .map(|todo| todo.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }
}
