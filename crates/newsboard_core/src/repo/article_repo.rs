//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Run lookup and listing statements produced by [`crate::query`].
//! - Insert, vote on and delete articles through the shared mutation paths.
//!
//! # Invariants
//! - Every article read carries its derived `comment_count`.
//! - Deleting an article removes its comments via the store's cascade.
//! - A vote change returns the row read under the same write lock.

use crate::model::article::{Article, ArticleId, ArticleSummary, NewArticle};
use crate::query::aggregate::{parse_article_row, parse_summary_row};
use crate::query::builder::{article_by_id_sql, ArticleListQuery};
use crate::repo::mutation::{self, MutableTable};
use crate::repo::RepoResult;
use log::info;
use rusqlite::{params, params_from_iter, Connection};

/// Repository interface for articles.
pub trait ArticleRepository {
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleSummary>>;
    fn create_article(&self, article: &NewArticle) -> RepoResult<ArticleId>;
    /// Applies a vote delta and returns the article as the write left it.
    fn increment_votes(&self, id: ArticleId, delta: i64) -> RepoResult<Article>;
    fn delete_article(&self, id: ArticleId) -> RepoResult<()>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        fetch_article(self.conn, id)
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleSummary>> {
        let (sql, bind_values) = query.to_sql();
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_summary_row(row)?);
        }
        Ok(articles)
    }

    fn create_article(&self, article: &NewArticle) -> RepoResult<ArticleId> {
        let id: ArticleId = self.conn.query_row(
            "INSERT INTO articles (title, topic, author, body, article_img_url)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING article_id;",
            params![
                article.title,
                article.topic,
                article.author,
                article.body,
                article.article_img_url,
            ],
            |row| row.get(0),
        )?;
        info!("event=article_create module=repo status=ok article_id={id}");
        Ok(id)
    }

    fn increment_votes(&self, id: ArticleId, delta: i64) -> RepoResult<Article> {
        mutation::increment_votes(self.conn, MutableTable::Articles, id, delta, fetch_article)
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<()> {
        mutation::delete_row(self.conn, MutableTable::Articles, id)
    }
}

fn fetch_article(conn: &Connection, id: ArticleId) -> RepoResult<Option<Article>> {
    let mut stmt = conn.prepare(&article_by_id_sql())?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_article_row(row)?));
    }
    Ok(None)
}
