use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use todo_core::ColorScheme;
use todo_store::STORAGE_KEY;

use crate::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "todo_app.ron";
/// Overrides the location of the config file.
pub const CONFIG_ENV: &str = "TODO_APP_CONFIG";
/// Overrides `data_dir` from the config file.
pub const DATA_DIR_ENV: &str = "TODO_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SchemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// Scheme at startup; toggling at runtime is not written back.
    pub color_scheme: SchemePreference,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".todo_app");
        Self {
            data_dir,
            storage_key: STORAGE_KEY.to_string(),
            color_scheme: SchemePreference::default(),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn color_scheme(&self) -> ColorScheme {
        match self.color_scheme {
            SchemePreference::Light => ColorScheme::Light,
            SchemePreference::Dark => ColorScheme::Dark,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        todo_logging::parse_level(&self.log_level).unwrap_or_else(todo_logging::default_level)
    }

    fn with_data_dir_override(mut self, data_dir: Option<OsString>) -> Self {
        if let Some(dir) = data_dir.filter(|dir| !dir.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = STORAGE_KEY.to_string();
        }
        self
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Reads `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Effective configuration plus the error that forced a fallback, if any.
///
/// Logging is not up yet when this runs, so the caller reports the error.
pub fn resolve() -> (AppConfig, Option<ConfigError>) {
    let (config, error) = match load_config(&config_path()) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    (
        config.with_data_dir_override(std::env::var_os(DATA_DIR_ENV)),
        error,
    )
}
