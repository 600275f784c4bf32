//! Topic repository contract and SQLite implementation.

use crate::model::topic::{NewTopic, Topic};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

/// Repository interface for topics.
pub trait TopicRepository {
    fn list_topics(&self) -> RepoResult<Vec<Topic>>;
    fn create_topic(&self, topic: &NewTopic) -> RepoResult<Topic>;
}

/// SQLite-backed topic repository.
pub struct SqliteTopicRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTopicRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TopicRepository for SqliteTopicRepository<'_> {
    fn list_topics(&self) -> RepoResult<Vec<Topic>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slug, description FROM topics ORDER BY slug ASC;")?;
        let mut rows = stmt.query([])?;
        let mut topics = Vec::new();
        while let Some(row) = rows.next()? {
            topics.push(parse_topic_row(row)?);
        }
        Ok(topics)
    }

    fn create_topic(&self, topic: &NewTopic) -> RepoResult<Topic> {
        let created = self.conn.query_row(
            "INSERT INTO topics (slug, description)
             VALUES (?1, ?2)
             RETURNING slug, description;",
            params![topic.slug, topic.description],
            parse_topic_row,
        )?;
        Ok(created)
    }
}

fn parse_topic_row(row: &Row<'_>) -> rusqlite::Result<Topic> {
    Ok(Topic {
        slug: row.get("slug")?,
        description: row.get("description")?,
    })
}
