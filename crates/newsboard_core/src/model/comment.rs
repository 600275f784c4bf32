//! Comment records.

use crate::error::ApiResult;
use crate::model::article::ArticleId;
use crate::model::Resource;
use crate::validate::FieldSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type CommentId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub body: String,
    pub article_id: ArticleId,
    pub author: String,
    pub votes: i64,
    pub created_at: i64,
}

impl Resource for Comment {
    const SINGULAR: &'static str = "comment";
    const PLURAL: &'static str = "comments";
}

/// Input for posting a comment; the author is given as `username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewComment {
    pub const FIELDS: FieldSpec = FieldSpec {
        entity: "comment",
        required: &["username", "body"],
        optional: &[],
    };

    pub fn from_payload(payload: &Value) -> ApiResult<Self> {
        let mut fields = Self::FIELDS.extract(payload)?;
        Ok(Self {
            username: fields.take_required("username")?,
            body: fields.take_required("body")?,
        })
    }
}
