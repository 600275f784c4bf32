//! SQLite store bootstrap for the board dataset.
//!
//! # Responsibility
//! - Open and configure connections for the resource engine.
//! - Apply schema migrations before any repository touches data.
//!
//! # Invariants
//! - Every connection handed out has `foreign_keys=ON`, so referential
//!   violations surface as store errors.
//! - Tables are `STRICT`; wrong-typed literals are rejected by the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening, configuring or migrating the store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build; it is left untouched.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Returns the underlying SQLite error, when there is one.
    pub fn as_sqlite(&self) -> Option<&rusqlite::Error> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "store failure: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "board schema v{found} is ahead of this build (max v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.as_sqlite().map(|err| err as &(dyn Error + 'static))
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
