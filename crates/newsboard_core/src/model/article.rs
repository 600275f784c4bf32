//! Article records.
//!
//! # Invariants
//! - `comment_count` is derived at read time and is `0`, never absent, for
//!   articles without comments.
//! - `created_at` is epoch milliseconds assigned by the store and never
//!   rewritten.

use crate::error::ApiResult;
use crate::model::Resource;
use crate::validate::FieldSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ArticleId = i64;

/// Image used when an article is created without one.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// Full article including body, as returned by single-article lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: i64,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl Resource for Article {
    const SINGULAR: &'static str = "article";
    const PLURAL: &'static str = "articles";
}

/// Listing row: everything but the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: i64,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl Resource for ArticleSummary {
    const SINGULAR: &'static str = "article";
    const PLURAL: &'static str = "articles";
}

/// Input for creating an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
}

impl NewArticle {
    pub const FIELDS: FieldSpec = FieldSpec {
        entity: "article",
        required: &["author", "title", "body", "topic"],
        optional: &["article_img_url"],
    };

    /// Builds the insert input, substituting [`DEFAULT_ARTICLE_IMG_URL`]
    /// when no image is given.
    pub fn from_payload(payload: &Value) -> ApiResult<Self> {
        let mut fields = Self::FIELDS.extract(payload)?;
        Ok(Self {
            author: fields.take_required("author")?,
            title: fields.take_required("title")?,
            body: fields.take_required("body")?,
            topic: fields.take_required("topic")?,
            article_img_url: fields
                .take_optional("article_img_url")
                .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string()),
        })
    }
}
