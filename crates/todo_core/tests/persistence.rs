use todo_core::{seed_todos, sort_newest_first, update, AppState, Effect, Msg, Todo};

fn init_logging() {
    todo_logging::initialize_for_tests();
}

#[test]
fn loaded_list_is_sorted_newest_first_and_persisted_once() {
    init_logging();
    let stored = vec![
        Todo {
            id: 2,
            title: "b".to_string(),
            completed: false,
        },
        Todo {
            id: 10,
            title: "j".to_string(),
            completed: true,
        },
        Todo {
            id: 4,
            title: "d".to_string(),
            completed: false,
        },
    ];

    let (state, effects) = update(
        AppState::new(),
        Msg::TodosLoaded {
            todos: stored,
            read_failed: false,
        },
    );
    let ids: Vec<_> = state.view().todos.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![10, 4, 2]);
    assert_eq!(effects, vec![Effect::PersistTodos(state.todos_snapshot())]);
}

#[test]
fn seed_list_has_unique_ids() {
    let mut seed = seed_todos();
    assert!(!seed.is_empty());

    sort_newest_first(&mut seed);
    let mut ids: Vec<_> = seed.iter().map(|t| t.id).collect();
    let sorted = ids.clone();
    ids.dedup();
    assert_eq!(ids, sorted);
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn add_after_seed_continues_ids() {
    init_logging();
    let max = seed_todos().iter().map(|t| t.id).max().unwrap();
    let (state, _) = update(
        AppState::new(),
        Msg::TodosLoaded {
            todos: seed_todos(),
            read_failed: false,
        },
    );
    let (state, _) = update(state, Msg::InputChanged("new".to_string()));
    let (state, _) = update(state, Msg::AddSubmitted);

    assert_eq!(state.todos()[0].id, max + 1);
    assert_eq!(state.view().todo_count, seed_todos().len() + 1);
}

#[test]
fn seed_after_failed_read_is_shown_but_not_persisted() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::TodosLoaded {
            todos: seed_todos(),
            read_failed: true,
        },
    );

    assert!(effects.is_empty());
    assert!(state.is_loaded());
    assert_eq!(state.view().todo_count, seed_todos().len());
    assert!(state.consume_dirty());

    // The first real mutation still persists the full list.
    let (state, effects) = update(state, Msg::TodoToggled { id: 1 });
    assert_eq!(effects, vec![Effect::PersistTodos(state.todos_snapshot())]);
}
