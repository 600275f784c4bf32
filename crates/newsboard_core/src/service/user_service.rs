//! User use-case service.

use crate::error::ApiResult;
use crate::model::user::User;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use crate::service::traced;
use crate::validate::parse_key;

/// User service facade over repository implementations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_users(&self) -> ApiResult<Vec<User>> {
        traced("user_list", || Ok(self.repo.list_users()?))
    }

    pub fn get_user(&self, raw_username: &str) -> ApiResult<User> {
        traced("user_get", || {
            let username = parse_key(raw_username, "username")?;
            self.repo
                .get_user(username)?
                .ok_or_else(|| RepoError::not_found("user", username).into())
        })
    }
}
