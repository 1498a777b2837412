//! Repository trait for session records.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for browser sessions, keyed by opaque token.
///
/// Only the Auth Gate mutates sessions; everything else reads them through
/// the request extension the session middleware populates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its token.
    async fn find(&self, hash: &str) -> Result<Option<Session>, AppError>;

    /// Creates a fresh anonymous session for the given token.
    async fn create(&self, hash: &str) -> Result<Session, AppError>;

    /// Binds an authenticated user to an existing session.
    async fn bind_user(&self, hash: &str, user_id: i64) -> Result<(), AppError>;

    /// Deletes a session. Deleting an unknown token is not an error.
    async fn delete(&self, hash: &str) -> Result<(), AppError>;
}
