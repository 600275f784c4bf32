//! Article use-case service.
//!
//! # Invariants
//! - A malformed id is rejected as `BadRequest` before the store is touched.
//! - A listing that matches nothing is `NotFound`, not an empty success.
//! - Vote changes never pre-check existence and return the row the write
//!   produced.

use crate::error::ApiResult;
use crate::model::article::{Article, ArticleSummary, NewArticle};
use crate::query::builder::{ArticleListParams, ArticleListQuery};
use crate::repo::article_repo::ArticleRepository;
use crate::repo::RepoError;
use crate::service::{non_empty, traced};
use crate::validate::{parse_id, parse_vote_delta};
use serde_json::Value;

const ID_NAME: &str = "article_id";

/// Article service facade over repository implementations.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetches one article with its comment count.
    pub fn get_article(&self, raw_id: &str) -> ApiResult<Article> {
        traced("article_get", || {
            let id = parse_id(raw_id, ID_NAME)?;
            self.repo
                .get_article(id)?
                .ok_or_else(|| RepoError::not_found("article", id).into())
        })
    }

    /// Lists article summaries filtered by topic and sorted through the
    /// sort-key allow-list.
    pub fn list_articles(&self, params: &ArticleListParams) -> ApiResult<Vec<ArticleSummary>> {
        traced("article_list", || {
            let query = ArticleListQuery::from_params(params)?;
            let articles = self.repo.list_articles(&query)?;
            non_empty(articles, "articles")
        })
    }

    /// Creates an article and returns it as stored.
    ///
    /// Unknown `topic` or `author` surfaces as `NotFound` via the store's
    /// foreign keys.
    pub fn create_article(&self, payload: &Value) -> ApiResult<Article> {
        traced("article_create", || {
            let article = NewArticle::from_payload(payload)?;
            let id = self.repo.create_article(&article)?;
            self.repo.get_article(id)?.ok_or_else(|| {
                RepoError::InvalidData(format!("created article missing on read-back: {id}"))
                    .into()
            })
        })
    }

    /// Applies a signed vote delta and returns the updated article.
    ///
    /// The result reflects this delta only, whatever other writers do.
    pub fn update_article_votes(&self, raw_id: &str, payload: &Value) -> ApiResult<Article> {
        traced("article_votes", || {
            let id = parse_id(raw_id, ID_NAME)?;
            let delta = parse_vote_delta(payload)?;
            Ok(self.repo.increment_votes(id, delta)?)
        })
    }

    /// Deletes an article; its comments go with it.
    pub fn delete_article(&self, raw_id: &str) -> ApiResult<()> {
        traced("article_delete", || {
            let id = parse_id(raw_id, ID_NAME)?;
            self.repo.delete_article(id)?;
            Ok(())
        })
    }
}
