use todo_core::{update, AppState, Msg, Todo};

fn loaded_state() -> AppState {
    let (mut state, _) = update(
        AppState::new(),
        Msg::TodosLoaded {
            todos: vec![Todo {
                id: 1,
                title: "a".to_string(),
                completed: false,
            }],
            read_failed: false,
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn remove_of_unknown_id_is_noop() {
    let state = loaded_state();
    let (next, effects) = update(state.clone(), Msg::TodoRemoved { id: 99 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn unchanged_input_does_not_mark_dirty() {
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("milk".to_string()));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::InputChanged("milk".to_string()));
    assert!(!state.consume_dirty());
    assert!(effects.is_empty());
}
