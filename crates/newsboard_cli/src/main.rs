//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open the configured board database and report what it holds.
//! - Keep output deterministic for quick local sanity checks.

use newsboard_core::{
    core_version, response, ApiResult, ArticleListParams, ArticleService, CommentService,
    CoreConfig, ErrorKind, SqliteArticleRepository, SqliteCommentRepository,
    SqliteTopicRepository, SqliteUserRepository, TopicService, UserService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("newsboard error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("newsboard_core version={}", core_version());

    let config = CoreConfig::from_env()?;
    if config.init_logging()? {
        log::info!("event=cli_start module=cli status=ok");
    }

    let conn = config.open_db()?;
    println!("db_path={}", config.db_path.display());

    let topics = TopicService::new(SqliteTopicRepository::new(&conn)).list_topics()?;
    let users = UserService::new(SqliteUserRepository::new(&conn)).list_users()?;
    println!("topics={}", topics.len());
    if !topics.is_empty() {
        println!("topics_body={}", response::many(&topics)?);
    }
    println!("users={}", users.len());

    let articles = empty_if_not_found(
        ArticleService::new(SqliteArticleRepository::new(&conn))
            .list_articles(&ArticleListParams::default()),
    )?;
    println!("articles={}", articles.len());

    let comments = CommentService::new(SqliteCommentRepository::new(&conn));
    let mut comment_total = 0;
    for article in &articles {
        let listed = empty_if_not_found(
            comments.list_comments_for_article(&article.article_id.to_string()),
        )?;
        comment_total += listed.len();
    }
    println!("comments={comment_total}");

    Ok(())
}

/// Empty listings are `NotFound` at the service level; count them as zero.
fn empty_if_not_found<T>(listed: ApiResult<Vec<T>>) -> ApiResult<Vec<T>> {
    match listed {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::empty_if_not_found;
    use newsboard_core::{ApiError, ErrorKind};

    #[test]
    fn not_found_listing_counts_as_empty() {
        let listed = empty_if_not_found::<u8>(Err(ApiError::not_found("no articles found")));
        assert_eq!(listed.unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn other_failures_are_not_swallowed() {
        let err = empty_if_not_found::<u8>(Err(ApiError::server_error())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);

        let err = empty_if_not_found::<u8>(Err(ApiError::bad_request("bad"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn successful_listing_passes_through() {
        assert_eq!(empty_if_not_found(Ok(vec![1, 2])).unwrap(), vec![1, 2]);
    }
}
