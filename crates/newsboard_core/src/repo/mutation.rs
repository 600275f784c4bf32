//! Shared write paths for vote-carrying, deletable resources.
//!
//! # Invariants
//! - Vote changes are one `votes = votes + ?` statement; the store
//!   serializes concurrent increments.
//! - Existence is decided by the affected-row count of the write itself.
//! - The row handed back after a vote change is read under the same write
//!   lock, never in a later statement.

use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

/// Resource tables that support vote increments and deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutableTable {
    Articles,
    Comments,
}

impl MutableTable {
    fn table(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Comments => "comments",
        }
    }

    fn id_column(self) -> &'static str {
        match self {
            Self::Articles => "article_id",
            Self::Comments => "comment_id",
        }
    }

    pub(crate) fn resource(self) -> &'static str {
        match self {
            Self::Articles => "article",
            Self::Comments => "comment",
        }
    }
}

/// `UPDATE` statement adding `?1` to the vote counter of row `?2`.
///
/// Callers may append a `RETURNING` clause.
pub fn vote_statement(target: MutableTable) -> String {
    format!(
        "UPDATE {} SET votes = votes + ?1 WHERE {} = ?2",
        target.table(),
        target.id_column()
    )
}

/// Adds `delta` (which may be negative) to the row's vote counter and
/// reads the row back inside the same immediate transaction.
///
/// # Errors
/// - `NotFound` when the update touched no row.
pub fn increment_votes<T>(
    conn: &Connection,
    target: MutableTable,
    id: i64,
    delta: i64,
    read: impl FnOnce(&Connection, i64) -> RepoResult<Option<T>>,
) -> RepoResult<T> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let changed = tx.execute(&vote_statement(target), params![delta, id])?;
    if changed == 0 {
        return Err(RepoError::not_found(target.resource(), id));
    }

    let locked: &Connection = &tx;
    let updated = read(locked, id)?.ok_or_else(|| {
        RepoError::InvalidData(format!(
            "{} {id} missing inside its vote transaction",
            target.resource()
        ))
    })?;
    tx.commit()?;

    log_votes(target, id, delta);
    Ok(updated)
}

pub(crate) fn log_votes(target: MutableTable, id: i64, delta: i64) {
    info!(
        "event=votes_increment module=repo status=ok resource={} id={id} delta={delta}",
        target.resource()
    );
}

/// Removes one row by id.
///
/// # Errors
/// - `NotFound` when nothing was removed.
pub fn delete_row(conn: &Connection, target: MutableTable, id: i64) -> RepoResult<()> {
    let changed = conn.execute(
        &format!(
            "DELETE FROM {} WHERE {} = ?1;",
            target.table(),
            target.id_column()
        ),
        [id],
    )?;

    if changed == 0 {
        return Err(RepoError::not_found(target.resource(), id));
    }

    info!(
        "event=row_delete module=repo status=ok resource={} id={id}",
        target.resource()
    );
    Ok(())
}
