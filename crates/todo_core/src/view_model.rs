use crate::{ColorScheme, TodoId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub todos: Vec<TodoRowView>,
    pub input: String,
    pub color_scheme: ColorScheme,
    pub todo_count: usize,
    pub completed_count: usize,
    pub loaded: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRowView {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}
