use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::filename::key_filename;
use crate::persist::{AtomicFileWriter, StoreError};

/// Local key-value slot storage: whole values are read and written at once.
pub trait KeyValueStore: Send {
    /// Returns `Ok(None)` when nothing was ever stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Overwrites the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    writer: AtomicFileWriter,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.writer.dir().join(key_filename(key))
    }
}

fn check_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.writer.write(&key_filename(key), value)?;
        Ok(())
    }
}

/// In-process store; clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        Ok(self.slots().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
