use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory missing or not writable: {0}")]
    DataDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid json: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("storage key {0:?} is empty")]
    InvalidKey(String),
}

/// Ensure the data directory exists; create if missing.
pub fn ensure_data_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StoreError::DataDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
///
/// Readers see either the previous snapshot or the new one, never a torn write.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, StoreError> {
        ensure_data_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| StoreError::Io(e.error))?;
        Ok(target)
    }
}
