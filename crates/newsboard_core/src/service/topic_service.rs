//! Topic use-case service.

use crate::error::ApiResult;
use crate::model::topic::{NewTopic, Topic};
use crate::repo::topic_repo::TopicRepository;
use crate::service::traced;
use serde_json::Value;

/// Topic service facade over repository implementations.
pub struct TopicService<R: TopicRepository> {
    repo: R,
}

impl<R: TopicRepository> TopicService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every topic; an empty board yields an empty list.
    pub fn list_topics(&self) -> ApiResult<Vec<Topic>> {
        traced("topic_list", || Ok(self.repo.list_topics()?))
    }

    /// Creates a topic from a `{slug, description}` payload.
    pub fn create_topic(&self, payload: &Value) -> ApiResult<Topic> {
        traced("topic_create", || {
            let topic = NewTopic::from_payload(payload)?;
            Ok(self.repo.create_topic(&topic)?)
        })
    }
}
