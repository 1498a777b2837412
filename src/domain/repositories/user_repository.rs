//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user from a username and pre-hashed credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; callers check for
    /// a taken username first.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
