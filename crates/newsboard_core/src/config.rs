//! Host configuration for the engine.
//!
//! # Responsibility
//! - Resolve database location and logging settings from the environment.
//! - Open the configured store.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-blank values are errors.

use crate::db::{open_db, DbResult};
use crate::logging::{default_log_level, init_logging, LoggingError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "NEWSBOARD_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "NEWSBOARD_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "NEWSBOARD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "newsboard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is set but holds only whitespace.
    Blank(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(var) => write!(f, "environment variable `{var}` is set but empty"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is off when no directory is configured.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                None => Ok(None),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(var)),
                Some(value) => Ok(Some(value.trim().to_string())),
            }
        };

        let db_path = read(DB_PATH_VAR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = read(LOG_LEVEL_VAR)?.unwrap_or_else(|| default_log_level().to_string());
        let log_dir = read(LOG_DIR_VAR)?.map(PathBuf::from);

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns whether logging was started.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match self.log_dir.as_deref() {
            Some(dir) => init_logging(&self.log_level, dir).map(|()| true),
            None => Ok(false),
        }
    }

    /// Opens and migrates the configured database.
    pub fn open_db(&self) -> DbResult<Connection> {
        open_db(&self.db_path)
    }
}
