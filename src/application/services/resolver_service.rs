//! Short-code resolution service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Service resolving a path segment to a redirect target.
///
/// Orchestrates lookup, click recording, and visit accounting. Only the
/// lookup decides the outcome: click and counter failures are telemetry
/// losses, logged and swallowed, never a reason to withhold the redirect.
pub struct ResolverService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Resolves a candidate short code to its stored URL.
    ///
    /// Returns `Ok(None)` for unknown codes, which callers answer with a
    /// redirect to `/` rather than an error page. On a hit, appends one
    /// click and bumps the visit counter before handing back the target.
    ///
    /// # Errors
    ///
    /// Only the initial lookup can fail the resolution; it surfaces store
    /// errors as [`AppError::Internal`].
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(link) = self.links.find_by_code(code).await? else {
            return Ok(None);
        };

        if let Err(e) = self.clicks.create(link.id).await {
            warn!("click recording failed for link {}: {e}", link.id);
        }

        if let Err(e) = self.links.increment_visits(link.id).await {
            warn!("visit increment failed for link {}: {e}", link.id);
        }

        Ok(Some(link.url))
    }
}
