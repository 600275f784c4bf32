//! Derived `comment_count` for article rows.
//!
//! # Responsibility
//! - Provide the article projection with its comment count attached in the
//!   same statement, so the count can drive `ORDER BY`.
//! - Decode article rows, including the derived count.
//!
//! # Invariants
//! - Counts are grouped per article before the join: one output row per
//!   article no matter how many comments it has.
//! - Articles without comments report `0`, never `NULL`.

use crate::model::article::{Article, ArticleSummary};
use crate::repo::{RepoError, RepoResult};
use rusqlite::Row;

/// Per-article comment totals, joined onto `articles a` as `cc`.
const COMMENT_COUNTS_JOIN: &str = "LEFT JOIN (
        SELECT article_id, COUNT(*) AS comment_count
        FROM comments
        GROUP BY article_id
    ) cc ON cc.article_id = a.article_id";

const SUMMARY_COLUMNS: &str = "a.article_id,
    a.title,
    a.topic,
    a.author,
    a.created_at,
    a.votes,
    a.article_img_url,
    COALESCE(cc.comment_count, 0) AS comment_count";

/// Article projection with body, for single-row lookups.
pub fn article_select() -> String {
    format!("SELECT a.body, {SUMMARY_COLUMNS} FROM articles a {COMMENT_COUNTS_JOIN}")
}

/// Article projection without body, for listings.
pub fn summary_select() -> String {
    format!("SELECT {SUMMARY_COLUMNS} FROM articles a {COMMENT_COUNTS_JOIN}")
}

pub fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    Ok(Article {
        article_id: row.get("article_id")?,
        title: row.get("title")?,
        topic: row.get("topic")?,
        author: row.get("author")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
        votes: row.get("votes")?,
        article_img_url: row.get("article_img_url")?,
        comment_count: read_comment_count(row)?,
    })
}

pub fn parse_summary_row(row: &Row<'_>) -> RepoResult<ArticleSummary> {
    Ok(ArticleSummary {
        article_id: row.get("article_id")?,
        title: row.get("title")?,
        topic: row.get("topic")?,
        author: row.get("author")?,
        created_at: row.get("created_at")?,
        votes: row.get("votes")?,
        article_img_url: row.get("article_img_url")?,
        comment_count: read_comment_count(row)?,
    })
}

fn read_comment_count(row: &Row<'_>) -> RepoResult<i64> {
    let count: Option<i64> = row.get("comment_count")?;
    match count {
        Some(value) if value >= 0 => Ok(value),
        Some(value) => Err(RepoError::InvalidData(format!(
            "negative comment_count `{value}`"
        ))),
        None => Err(RepoError::InvalidData(
            "comment_count resolved to NULL".to_string(),
        )),
    }
}
