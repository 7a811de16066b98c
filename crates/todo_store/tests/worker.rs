use tempfile::TempDir;
use todo_core::Todo;
use todo_store::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, PersistEvent, PersistHandle,
    StoreError, TodoStore,
};

fn init_logging() {
    todo_logging::initialize_for_tests();
}

fn list(len: u64) -> Vec<Todo> {
    (1..=len)
        .rev()
        .map(|id| Todo {
            id,
            title: format!("todo {id}"),
            completed: false,
        })
        .collect()
}

fn drain(handle: &PersistHandle) -> Vec<PersistEvent> {
    std::iter::from_fn(|| handle.try_recv()).collect()
}

#[test]
fn snapshots_land_in_send_order() {
    init_logging();
    let kv = MemoryKeyValueStore::new();
    let handle = PersistHandle::new(TodoStore::new(kv.clone()));

    for len in 1..=20 {
        handle.persist(list(len));
    }
    handle.flush();

    let reader = TodoStore::new(kv);
    assert_eq!(reader.try_load().unwrap(), Some(list(20)));
    let events = drain(&handle);
    assert_eq!(events.len(), 20);
    assert_eq!(events.last(), Some(&PersistEvent::Saved { count: 20 }));
}

#[test]
fn writes_to_disk_in_background() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let handle = PersistHandle::new(TodoStore::new(FileKeyValueStore::new(temp.path())));

    handle.persist(list(3));
    handle.flush();

    let reader = TodoStore::new(FileKeyValueStore::new(temp.path()));
    assert_eq!(reader.load().todos, list(3));
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::DataDir("read-only".into()))
    }
}

#[test]
fn failed_write_is_reported_as_event() {
    init_logging();
    let handle = PersistHandle::new(TodoStore::new(ReadOnlyStore));

    handle.persist(list(1));
    handle.flush();

    match drain(&handle).as_slice() {
        [PersistEvent::Failed { message }] => assert!(message.contains("read-only")),
        other => panic!("unexpected events: {other:?}"),
    }
}
