//! Parameterized read statements for articles.
//!
//! # Responsibility
//! - Turn raw listing parameters into a validated [`ArticleListQuery`].
//! - Render listing and lookup SQL with bind values.
//!
//! # Invariants
//! - Filter values are always bound, never formatted into SQL.
//! - `ORDER BY` text comes only from [`ArticleSortKey::column`] and
//!   [`SortOrder::as_sql`].
//! - Ties break on `article_id ASC` so output order is deterministic.

use crate::error::{ApiError, ApiResult};
use crate::query::aggregate::{article_select, summary_select};
use crate::query::sort::{ArticleSortKey, SortOrder};
use rusqlite::types::Value;

/// Raw listing parameters as handed over by the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ArticleListParams {
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

/// Validated listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub topic: Option<String>,
    pub sort_key: ArticleSortKey,
    pub order: SortOrder,
}

impl ArticleListQuery {
    /// Resolves raw parameters against the allow-lists.
    ///
    /// # Errors
    /// - Unknown `sort_by` is `NotFound`: the requested ordering of the
    ///   resource does not exist.
    /// - Unknown `order` is `BadRequest`.
    pub fn from_params(params: &ArticleListParams) -> ApiResult<Self> {
        let sort_key = match params.sort_by.as_deref() {
            None => ArticleSortKey::default(),
            Some(name) => ArticleSortKey::parse(name)
                .ok_or_else(|| ApiError::not_found(format!("unknown sort key `{name}`")))?,
        };
        let order = match params.order.as_deref() {
            None => SortOrder::default(),
            Some(value) => SortOrder::parse(value).ok_or_else(|| {
                ApiError::bad_request(format!("order must be `asc` or `desc`, got `{value}`"))
            })?,
        };

        Ok(Self {
            topic: params.topic.clone(),
            sort_key,
            order,
        })
    }

    /// Renders the listing statement and its bind values.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = summary_select();
        let mut bind_values = Vec::new();

        if let Some(topic) = self.topic.as_ref() {
            sql.push_str(" WHERE a.topic = ?");
            bind_values.push(Value::Text(topic.clone()));
        }

        sql.push_str(&format!(
            " ORDER BY {} {}, a.article_id ASC",
            self.sort_key.column(),
            self.order.as_sql()
        ));

        (sql, bind_values)
    }
}

/// Single-article lookup keyed by `?1`.
pub fn article_by_id_sql() -> String {
    format!("{} WHERE a.article_id = ?1", article_select())
}

#[cfg(test)]
mod tests {
    use super::{ArticleListParams, ArticleListQuery};
    use crate::error::ErrorKind;
    use crate::query::sort::{ArticleSortKey, SortOrder};
    use rusqlite::types::Value;

    #[test]
    fn defaults_to_created_at_descending() {
        let query = ArticleListQuery::from_params(&ArticleListParams::default()).unwrap();
        assert_eq!(query.sort_key, ArticleSortKey::CreatedAt);
        assert_eq!(query.order, SortOrder::Desc);

        let (sql, binds) = query.to_sql();
        assert!(sql.ends_with("ORDER BY a.created_at DESC, a.article_id ASC"));
        assert!(!sql.contains("WHERE"));
        assert!(binds.is_empty());
    }

    #[test]
    fn topic_is_bound_not_interpolated() {
        let params = ArticleListParams::default().topic("cats' OR 1=1 --");
        let (sql, binds) = ArticleListQuery::from_params(&params).unwrap().to_sql();
        assert!(sql.contains("WHERE a.topic = ?"));
        assert!(!sql.contains("OR 1=1"));
        assert_eq!(binds, vec![Value::Text("cats' OR 1=1 --".to_string())]);
    }

    #[test]
    fn unknown_sort_key_is_not_found() {
        let params = ArticleListParams::default().sort_by("not_a_column");
        let err = ArticleListQuery::from_params(&params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn unknown_order_is_bad_request() {
        let params = ArticleListParams::default().order("random");
        let err = ArticleListQuery::from_params(&params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn comment_count_sort_uses_grouped_alias() {
        let params = ArticleListParams::default()
            .sort_by("comment_count")
            .order("asc");
        let (sql, _) = ArticleListQuery::from_params(&params).unwrap().to_sql();
        assert!(sql.contains("GROUP BY article_id"));
        assert!(sql.contains("ORDER BY comment_count ASC"));
    }
}
