//! Sort allow-list for article listings.
//!
//! Client-facing sort names resolve through a fixed table to physical
//! column expressions; nothing outside the table ever reaches SQL.

use std::fmt::{Display, Formatter};

/// Logical sort keys accepted for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    #[default]
    CreatedAt,
    Title,
    Topic,
    Author,
    Votes,
    ArticleId,
    CommentCount,
}

const SORT_KEYS: &[(&str, ArticleSortKey, &str)] = &[
    ("created_at", ArticleSortKey::CreatedAt, "a.created_at"),
    ("title", ArticleSortKey::Title, "a.title"),
    ("topic", ArticleSortKey::Topic, "a.topic"),
    ("author", ArticleSortKey::Author, "a.author"),
    ("votes", ArticleSortKey::Votes, "a.votes"),
    ("article_id", ArticleSortKey::ArticleId, "a.article_id"),
    ("comment_count", ArticleSortKey::CommentCount, "comment_count"),
];

impl ArticleSortKey {
    /// Resolves a client-facing name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        SORT_KEYS
            .iter()
            .find(|(logical, _, _)| *logical == name)
            .map(|(_, key, _)| *key)
    }

    /// Physical column (or aggregate alias) this key sorts on.
    pub fn column(self) -> &'static str {
        self.entry().2
    }

    pub fn as_str(self) -> &'static str {
        self.entry().0
    }

    fn entry(self) -> &'static (&'static str, ArticleSortKey, &'static str) {
        // Every variant has exactly one row in SORT_KEYS.
        SORT_KEYS
            .iter()
            .find(|(_, key, _)| *key == self)
            .unwrap_or(&SORT_KEYS[0])
    }
}

impl Display for ArticleSortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Accepts `asc`/`desc` in any letter case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
