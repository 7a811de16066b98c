#![deny(missing_docs)]
//! Shared logging utilities for the todo workspace.
//!
//! This crate provides the `todo_*` logging macros used across the codebase,
//! level parsing for configuration files, and a minimal test initializer for
//! the global logger.

pub use log::LevelFilter;

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! todo_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! todo_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! todo_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! todo_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `"info"` or `"Debug"`.
///
/// Returns `None` for unknown names so callers can fall back to a default.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Default level: debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("info"), Some(LevelFilter::Info));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    }

    #[test]
    fn unknown_level_is_none() {
        assert_eq!(parse_level("loud"), None);
    }
}
