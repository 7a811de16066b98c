use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every change to the list yields exactly one `Effect::PersistTodos` carrying
/// the whole list; theme and input changes never touch persistence. A load
/// that fell back to the seed list after a failed read is not persisted.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let list_changed = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            false
        }
        Msg::AddSubmitted => state.add_from_input(),
        Msg::TodoToggled { id } => state.toggle(id),
        Msg::TodoRemoved { id } => state.remove(id),
        Msg::ThemeToggled => {
            state.toggle_color_scheme();
            false
        }
        Msg::TodosLoaded { todos, read_failed } => {
            state.replace_todos(todos);
            !read_failed
        }
    };

    let effects = if list_changed {
        vec![Effect::PersistTodos(state.todos_snapshot())]
    } else {
        Vec::new()
    };
    (state, effects)
}
