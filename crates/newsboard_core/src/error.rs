//! Error taxonomy shared by every resource service.
//!
//! # Responsibility
//! - Reduce every failure to one of three caller-visible kinds.
//! - Translate SQLite extended result codes into that vocabulary.
//!
//! # Invariants
//! - A `ServerError` never carries internal detail; the full cause is only
//!   written to the log.
//! - Classification is total: anything unrecognized is `ServerError`.

use crate::repo::RepoError;
use log::{debug, error};
use rusqlite::ErrorCode;
use serde::Serialize;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `SQLITE_MISMATCH`: datatype mismatch on a rowid or similar.
const SQLITE_MISMATCH: i32 = 20;
/// `SQLITE_CONSTRAINT_FOREIGNKEY`.
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;
/// `SQLITE_CONSTRAINT_DATATYPE`: wrong-typed value for a STRICT column.
const SQLITE_CONSTRAINT_DATATYPE: i32 = 3091;

const BAD_REQUEST_MSG: &str = "Bad request";
const NOT_FOUND_MSG: &str = "Not found";
const SERVER_ERROR_MSG: &str = "Server Error!";

pub type ApiResult<T> = Result<T, ApiError>;

/// Caller-visible failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed, missing or wrong-typed input.
    BadRequest,
    /// The requested or referenced entity does not exist, or a selector
    /// resolves to nothing.
    NotFound,
    /// Anything unclassified.
    ServerError,
}

impl ErrorKind {
    /// Conventional HTTP status for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::ServerError => 500,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => BAD_REQUEST_MSG,
            Self::NotFound => NOT_FOUND_MSG,
            Self::ServerError => SERVER_ERROR_MSG,
        }
    }
}

/// Typed failure returned by every public service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Generic server failure; never carries detail.
    pub fn server_error() -> Self {
        Self::new(ErrorKind::ServerError, SERVER_ERROR_MSG)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Response body in the `{"msg": ...}` shape clients already consume.
    pub fn body(&self) -> Value {
        json!({ "msg": self.message })
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.kind.status_code())
    }
}

impl Error for ApiError {}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        classify(value)
    }
}

/// Maps a repository failure onto the caller-visible taxonomy.
///
/// Unclassified failures are logged with full detail here, so callers only
/// ever see the generic message.
pub fn classify(err: RepoError) -> ApiError {
    match &err {
        RepoError::NotFound { .. } => {
            debug!("event=classify_error module=error status=ok kind=not_found error={err}");
            ApiError::not_found(err.to_string())
        }
        RepoError::Db(db_err) => match db_err.as_sqlite().and_then(classify_sqlite) {
            Some(kind) => {
                debug!(
                    "event=classify_error module=error status=ok kind={kind:?} error={db_err}"
                );
                ApiError::new(kind, kind.default_message())
            }
            None => unclassified(&err),
        },
        RepoError::InvalidData(_) => unclassified(&err),
    }
}

/// Classifies a raw SQLite error by its extended result code.
///
/// Returns `None` for anything that is not a known client-caused failure.
pub fn classify_sqlite(err: &rusqlite::Error) -> Option<ErrorKind> {
    let rusqlite::Error::SqliteFailure(failure, _) = err else {
        return None;
    };

    match failure.extended_code {
        SQLITE_CONSTRAINT_DATATYPE | SQLITE_MISMATCH => Some(ErrorKind::BadRequest),
        SQLITE_CONSTRAINT_FOREIGNKEY => Some(ErrorKind::NotFound),
        _ if failure.code == ErrorCode::TypeMismatch => Some(ErrorKind::BadRequest),
        _ => None,
    }
}

fn unclassified(err: &RepoError) -> ApiError {
    error!("event=classify_error module=error status=error kind=server_error error={err}");
    ApiError::server_error()
}
