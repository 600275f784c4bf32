#![allow(dead_code)]

use newsboard_core::db::open_db_in_memory;
use newsboard_core::{
    ArticleService, CommentService, SqliteArticleRepository, SqliteCommentRepository,
    SqliteTopicRepository, SqliteUserRepository, TopicService, UserService,
};
use rusqlite::{params, Connection};

pub const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

pub const USERS: &[(&str, &str, Option<&str>)] = &[
    (
        "butter_bridge",
        "jonny",
        Some("https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"),
    ),
    (
        "icellusedkars",
        "sam",
        Some("https://avatars2.githubusercontent.com/u/24604688?s=460&v=4"),
    ),
    ("rogersop", "paul", None),
    ("lurker", "do_nothing", None),
];

/// `(article_id, title, topic, author, created_at, votes)`
pub const ARTICLES: &[(i64, &str, &str, &str, i64, i64)] = &[
    (1, "Living in the shadow of a great man", "mitch", "butter_bridge", 1_594_329_060_000, 100),
    (2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", 1_602_828_180_000, 0),
    (3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", 1_604_394_720_000, 0),
    (4, "Student SUES Mitch!", "mitch", "rogersop", 1_588_731_240_000, 0),
    (5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", 1_596_464_040_000, 0),
    (6, "A", "mitch", "icellusedkars", 1_603_140_900_000, 0),
    (7, "Z", "mitch", "icellusedkars", 1_578_406_080_000, 0),
    (8, "Does Mitch predate civilisation?", "cats", "butter_bridge", 1_600_000_000_000, 5),
];

/// `(comment_id, article_id, author, votes, created_at)`
pub const COMMENTS: &[(i64, i64, &str, i64, i64)] = &[
    (1, 1, "butter_bridge", 16, 1_586_179_020_000),
    (2, 1, "icellusedkars", 14, 1_604_113_380_000),
    (3, 1, "icellusedkars", 100, 1_583_025_180_000),
    (4, 1, "butter_bridge", -100, 1_584_205_320_000),
    (5, 3, "icellusedkars", 0, 1_600_560_600_000),
    (6, 3, "butter_bridge", 10, 1_605_212_360_000),
    (7, 5, "rogersop", 0, 1_591_438_200_000),
    (8, 5, "butter_bridge", 3, 1_590_000_000_000),
    (9, 6, "icellusedkars", 1, 1_606_000_000_000),
    (10, 8, "lurker", 0, 1_601_000_000_000),
    (11, 8, "lurker", 2, 1_601_000_005_000),
];

pub const ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Opens a migrated in-memory database loaded with the fixture rows.
pub fn seeded_db() -> Connection {
    let conn = open_db_in_memory().unwrap();

    for (slug, description) in TOPICS {
        conn.execute(
            "INSERT INTO topics (slug, description) VALUES (?1, ?2);",
            params![slug, description],
        )
        .unwrap();
    }
    for (username, name, avatar_url) in USERS {
        conn.execute(
            "INSERT INTO users (username, name, avatar_url) VALUES (?1, ?2, ?3);",
            params![username, name, avatar_url],
        )
        .unwrap();
    }
    for (id, title, topic, author, created_at, votes) in ARTICLES {
        conn.execute(
            "INSERT INTO articles
                (article_id, title, topic, author, body, created_at, votes, article_img_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                id,
                title,
                topic,
                author,
                format!("body of article {id}"),
                created_at,
                votes,
                ARTICLE_IMG_URL
            ],
        )
        .unwrap();
    }
    for (id, article_id, author, votes, created_at) in COMMENTS {
        conn.execute(
            "INSERT INTO comments (comment_id, body, article_id, author, votes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id,
                format!("comment {id}"),
                article_id,
                author,
                votes,
                created_at
            ],
        )
        .unwrap();
    }

    conn
}

/// Number of fixture comments attached to `article_id`.
pub fn fixture_comment_count(article_id: i64) -> i64 {
    COMMENTS
        .iter()
        .filter(|(_, parent, _, _, _)| *parent == article_id)
        .count() as i64
}

pub fn max_article_id() -> i64 {
    ARTICLES.iter().map(|(id, ..)| *id).max().unwrap_or(0)
}

pub fn articles(conn: &Connection) -> ArticleService<SqliteArticleRepository<'_>> {
    ArticleService::new(SqliteArticleRepository::new(conn))
}

pub fn comments(conn: &Connection) -> CommentService<SqliteCommentRepository<'_>> {
    CommentService::new(SqliteCommentRepository::new(conn))
}

pub fn topics(conn: &Connection) -> TopicService<SqliteTopicRepository<'_>> {
    TopicService::new(SqliteTopicRepository::new(conn))
}

pub fn users(conn: &Connection) -> UserService<SqliteUserRepository<'_>> {
    UserService::new(SqliteUserRepository::new(conn))
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
