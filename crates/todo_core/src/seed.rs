use crate::Todo;

const SEED: &[(u64, &str, bool)] = &[
    (1, "Pay bills", false),
    (2, "Go to the gym", false),
    (3, "Buy groceries", false),
    (4, "Read a book", true),
    (5, "Call mom", false),
    (6, "Clean the house", true),
    (7, "Plan the weekend trip", false),
];

/// Bundled list used when nothing has been persisted yet.
///
/// Returned in declaration order; callers sort it like any loaded list.
pub fn seed_todos() -> Vec<Todo> {
    SEED.iter()
        .map(|&(id, title, completed)| Todo {
            id,
            title: title.to_string(),
            completed,
        })
        .collect()
}
