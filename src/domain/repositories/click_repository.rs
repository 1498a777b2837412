//! Repository trait for click event storage.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click log.
///
/// Click recording is best-effort telemetry: callers log failures and carry
/// on with the redirect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event for the given link.
    async fn create(&self, link_id: i64) -> Result<Click, AppError>;

    /// Counts recorded clicks for a link.
    async fn count_for_link(&self, link_id: i64) -> Result<i64, AppError>;
}
