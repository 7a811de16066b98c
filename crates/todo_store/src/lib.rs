//! Todo store: local key-value persistence for the to-do list.
mod codec;
mod filename;
mod kv;
mod persist;
mod store;
mod worker;

pub use codec::{decode_todos, encode_todos};
pub use filename::key_filename;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use persist::{ensure_data_dir, AtomicFileWriter, StoreError};
pub use store::{LoadedTodos, TodoStore, STORAGE_KEY};
pub use worker::{PersistEvent, PersistHandle};
