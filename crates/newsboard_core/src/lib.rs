//! Resource query and mutation engine for the newsboard dataset.
//!
//! Services in [`service`] are the public contract: each takes raw path
//! identifiers, listing parameters or JSON payloads and returns a plain
//! serializable value or a classified [`ApiError`].

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod response;
pub mod service;
pub mod validate;

pub use config::{ConfigError, CoreConfig};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{Article, ArticleId, ArticleSummary, NewArticle, DEFAULT_ARTICLE_IMG_URL};
pub use model::comment::{Comment, CommentId, NewComment};
pub use model::topic::{NewTopic, Topic};
pub use model::user::User;
pub use model::Resource;
pub use query::builder::{ArticleListParams, ArticleListQuery};
pub use query::sort::{ArticleSortKey, SortOrder};
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::topic_repo::{SqliteTopicRepository, TopicRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::article_service::ArticleService;
pub use service::comment_service::CommentService;
pub use service::topic_service::TopicService;
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
