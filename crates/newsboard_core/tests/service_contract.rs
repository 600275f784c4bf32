use newsboard_core::{
    Article, ArticleId, ArticleListQuery, ArticleRepository, ArticleService, ArticleSummary,
    ErrorKind, NewArticle, RepoError, RepoResult,
};
use serde_json::json;
use std::cell::RefCell;

/// Records every call instead of touching a store.
#[derive(Default)]
struct RecordingRepo {
    calls: RefCell<Vec<String>>,
    missing: bool,
}

impl RecordingRepo {
    fn missing() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn stored_article(id: ArticleId, votes: i64) -> Article {
    Article {
        article_id: id,
        title: "title".to_string(),
        topic: "cats".to_string(),
        author: "lurker".to_string(),
        body: "body".to_string(),
        created_at: 0,
        votes,
        article_img_url: "img".to_string(),
        comment_count: 0,
    }
}

impl ArticleRepository for &RecordingRepo {
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        self.record(format!("get_article:{id}"));
        Ok((!self.missing).then(|| stored_article(id, 1)))
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleSummary>> {
        self.record(format!("list_articles:{}", query.sort_key));
        Ok(Vec::new())
    }

    fn create_article(&self, article: &NewArticle) -> RepoResult<ArticleId> {
        self.record(format!("create_article:{}", article.title));
        Ok(42)
    }

    fn increment_votes(&self, id: ArticleId, delta: i64) -> RepoResult<Article> {
        self.record(format!("increment_votes:{id}:{delta}"));
        if self.missing {
            return Err(RepoError::NotFound {
                resource: "article",
                key: id.to_string(),
            });
        }
        Ok(stored_article(id, 1 + delta))
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<()> {
        self.record(format!("delete_article:{id}"));
        Ok(())
    }
}

#[test]
fn malformed_ids_never_reach_the_repository() {
    let repo = RecordingRepo::default();
    let service = ArticleService::new(&repo);

    assert_eq!(
        service.get_article("notAnId").unwrap_err().kind(),
        ErrorKind::BadRequest
    );
    assert_eq!(
        service.delete_article("1.5").unwrap_err().kind(),
        ErrorKind::BadRequest
    );
    assert_eq!(
        service
            .update_article_votes("x", &json!({"inc_votes": 1}))
            .unwrap_err()
            .kind(),
        ErrorKind::BadRequest
    );
    assert!(repo.calls().is_empty());
}

#[test]
fn invalid_payloads_never_reach_the_repository() {
    let repo = RecordingRepo::default();
    let service = ArticleService::new(&repo);

    service
        .update_article_votes("1", &json!({"inc_votes": "up"}))
        .unwrap_err();
    service.create_article(&json!({"title": "only"})).unwrap_err();
    assert!(repo.calls().is_empty());
}

#[test]
fn vote_update_returns_the_row_from_the_write_alone() {
    let repo = RecordingRepo::default();
    let service = ArticleService::new(&repo);

    let updated = service
        .update_article_votes("7", &json!({"inc_votes": -2}))
        .unwrap();
    assert_eq!(updated.votes, -1);
    assert_eq!(repo.calls(), vec!["increment_votes:7:-2"]);
}

#[test]
fn vote_update_on_missing_article_is_decided_by_the_write() {
    let repo = RecordingRepo::missing();
    let service = ArticleService::new(&repo);

    let err = service
        .update_article_votes("7", &json!({"inc_votes": 1}))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(repo.calls(), vec!["increment_votes:7:1"]);
}

#[test]
fn create_reads_back_the_assigned_id() {
    let repo = RecordingRepo::default();
    let service = ArticleService::new(&repo);

    let created = service
        .create_article(&json!({
            "author": "lurker",
            "title": "Fresh",
            "body": "text",
            "topic": "cats"
        }))
        .unwrap();
    assert_eq!(created.article_id, 42);
    assert_eq!(repo.calls(), vec!["create_article:Fresh", "get_article:42"]);
}

#[test]
fn missing_row_after_create_is_a_server_error() {
    let repo = RecordingRepo::missing();
    let service = ArticleService::new(&repo);

    let err = service
        .create_article(&json!({
            "author": "lurker",
            "title": "Fresh",
            "body": "text",
            "topic": "cats"
        }))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServerError);
}

#[test]
fn empty_listing_is_not_found() {
    let repo = RecordingRepo::default();
    let service = ArticleService::new(&repo);

    let err = service
        .list_articles(&Default::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(repo.calls(), vec!["list_articles:created_at"]);
}
