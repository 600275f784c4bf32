//! Comment use-case service.

use crate::error::ApiResult;
use crate::model::comment::{Comment, NewComment};
use crate::repo::comment_repo::CommentRepository;
use crate::service::{non_empty, traced};
use crate::validate::{parse_id, parse_vote_delta};
use serde_json::Value;

/// Comment service facade over repository implementations.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists an article's comments, newest first.
    ///
    /// An article without comments (or an unknown article) is `NotFound`.
    pub fn list_comments_for_article(&self, raw_article_id: &str) -> ApiResult<Vec<Comment>> {
        traced("comment_list", || {
            let article_id = parse_id(raw_article_id, "article_id")?;
            let comments = self.repo.list_for_article(article_id)?;
            non_empty(comments, "comments")
        })
    }

    /// Posts a comment on an article.
    ///
    /// Payload keys other than `username` and `body` are ignored. Unknown
    /// article or username surfaces as `NotFound` via the store's foreign
    /// keys.
    pub fn create_comment(&self, raw_article_id: &str, payload: &Value) -> ApiResult<Comment> {
        traced("comment_create", || {
            let article_id = parse_id(raw_article_id, "article_id")?;
            let comment = NewComment::from_payload(payload)?;
            Ok(self.repo.create_comment(article_id, &comment)?)
        })
    }

    /// Applies a signed vote delta and returns the updated comment.
    pub fn update_comment_votes(&self, raw_id: &str, payload: &Value) -> ApiResult<Comment> {
        traced("comment_votes", || {
            let id = parse_id(raw_id, "comment_id")?;
            let delta = parse_vote_delta(payload)?;
            Ok(self.repo.increment_votes(id, delta)?)
        })
    }

    pub fn delete_comment(&self, raw_id: &str) -> ApiResult<()> {
        traced("comment_delete", || {
            let id = parse_id(raw_id, "comment_id")?;
            self.repo.delete_comment(id)?;
            Ok(())
        })
    }
}
