//! Repository layer: SQL per resource kind.
//!
//! # Responsibility
//! - Issue parameterized statements against the board store.
//! - Report semantic misses (`NotFound`) separately from store failures.
//!
//! # Invariants
//! - No caller-supplied text is ever spliced into SQL; only static
//!   identifiers from allow-lists are formatted into statements.
//! - Repositories never pre-check existence before a write; affected-row
//!   counts decide `NotFound`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod comment_repo;
pub mod mutation;
pub mod topic_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Store-level failure, classified later by [`crate::error`].
    Db(DbError),
    /// The targeted (or filtered) slice of a resource does not exist.
    NotFound {
        resource: &'static str,
        key: String,
    },
    /// A persisted row cannot be decoded into its read model.
    InvalidData(String),
}

impl RepoError {
    pub(crate) fn not_found(resource: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { resource, key } => write!(f, "{resource} not found: {key}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
