#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the stored snapshot with the full list.
    PersistTodos(Vec<crate::Todo>),
}
