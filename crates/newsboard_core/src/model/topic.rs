//! Topic records.

use crate::error::ApiResult;
use crate::model::Resource;
use crate::validate::FieldSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

impl Resource for Topic {
    const SINGULAR: &'static str = "topic";
    const PLURAL: &'static str = "topics";
}

/// Input for creating a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub slug: String,
    pub description: String,
}

impl NewTopic {
    pub const FIELDS: FieldSpec = FieldSpec {
        entity: "topic",
        required: &["slug", "description"],
        optional: &[],
    };

    pub fn from_payload(payload: &Value) -> ApiResult<Self> {
        let mut fields = Self::FIELDS.extract(payload)?;
        Ok(Self {
            slug: fields.take_required("slug")?,
            description: fields.take_required("description")?,
        })
    }
}
