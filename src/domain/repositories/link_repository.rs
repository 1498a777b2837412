//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Lookups are exact-match on a single key and report a miss as `Ok(None)`,
/// never as an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new short link with `visits = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a code
    /// or URL uniqueness violation (callers check both before creating).
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original URL.
    ///
    /// Used to keep link creation idempotent by URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Returns all links, unordered.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Adds exactly 1 to the link's visit counter and returns the updated row.
    ///
    /// The only mutation links undergo after creation. Implementations must
    /// never let the counter decrease; the Postgres implementation increments
    /// atomically in the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the given id.
    async fn increment_visits(&self, id: i64) -> Result<Link, AppError>;
}
