//! Comment repository contract and SQLite implementation.
//!
//! # Invariants
//! - Comments for an article are listed newest first, ties by id.
//! - Vote changes return the row from the `UPDATE` itself.
//! - Inserts rely on the store's foreign keys to reject unknown articles
//!   and authors.

use crate::model::article::ArticleId;
use crate::model::comment::{Comment, CommentId, NewComment};
use crate::repo::mutation::{self, MutableTable};
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COMMENT_COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// Repository interface for comments.
pub trait CommentRepository {
    fn list_for_article(&self, article_id: ArticleId) -> RepoResult<Vec<Comment>>;
    fn create_comment(&self, article_id: ArticleId, comment: &NewComment) -> RepoResult<Comment>;
    /// Applies a vote delta and returns the comment as the write left it.
    fn increment_votes(&self, id: CommentId, delta: i64) -> RepoResult<Comment>;
    fn delete_comment(&self, id: CommentId) -> RepoResult<()>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn list_for_article(&self, article_id: ArticleId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMMENT_COLUMNS}
             FROM comments
             WHERE article_id = ?1
             ORDER BY created_at DESC, comment_id DESC;"
        ))?;
        let comments = stmt
            .query_map([article_id], parse_comment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    fn create_comment(&self, article_id: ArticleId, comment: &NewComment) -> RepoResult<Comment> {
        let created = self.conn.query_row(
            &format!(
                "INSERT INTO comments (body, author, article_id)
                 VALUES (?1, ?2, ?3)
                 RETURNING {COMMENT_COLUMNS};"
            ),
            params![comment.body, comment.username, article_id],
            parse_comment_row,
        )?;
        info!(
            "event=comment_create module=repo status=ok comment_id={} article_id={article_id}",
            created.comment_id
        );
        Ok(created)
    }

    fn increment_votes(&self, id: CommentId, delta: i64) -> RepoResult<Comment> {
        let target = MutableTable::Comments;
        let updated = self
            .conn
            .query_row(
                &format!(
                    "{} RETURNING {COMMENT_COLUMNS};",
                    mutation::vote_statement(target)
                ),
                params![delta, id],
                parse_comment_row,
            )
            .optional()?
            .ok_or_else(|| RepoError::not_found(target.resource(), id))?;
        mutation::log_votes(target, id, delta);
        Ok(updated)
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        mutation::delete_row(self.conn, MutableTable::Comments, id)
    }
}

fn parse_comment_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        comment_id: row.get("comment_id")?,
        body: row.get("body")?,
        article_id: row.get("article_id")?,
        author: row.get("author")?,
        votes: row.get("votes")?,
        created_at: row.get("created_at")?,
    })
}
