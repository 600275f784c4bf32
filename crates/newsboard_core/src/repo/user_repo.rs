//! User repository contract and SQLite implementation.

use crate::model::user::User;
use crate::repo::RepoResult;
use rusqlite::{Connection, OptionalExtension, Row};

/// Repository interface for users. Users are read-only for the engine.
pub trait UserRepository {
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn get_user(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT username, name, avatar_url FROM users ORDER BY username ASC;")?;
        let users = stmt
            .query_map([], parse_user_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT username, name, avatar_url FROM users WHERE username = ?1;",
                [username],
                parse_user_row,
            )
            .optional()?;
        Ok(user)
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        username: row.get("username")?,
        name: row.get("name")?,
        avatar_url: row.get("avatar_url")?,
    })
}
