#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the new-todo input box.
    InputChanged(String),
    /// User pressed Add with the current input.
    AddSubmitted,
    /// User tapped a row.
    TodoToggled { id: crate::TodoId },
    /// User tapped the delete icon of a row.
    TodoRemoved { id: crate::TodoId },
    /// User tapped the sun/moon button.
    ThemeToggled,
    /// Startup load finished (stored snapshot or seed list).
    ///
    /// `read_failed` is set when the stored snapshot exists but could not be
    /// read or parsed; the list is then the seed list and must not be written
    /// over the snapshot.
    TodosLoaded {
        todos: Vec<crate::Todo>,
        read_failed: bool,
    },
}
