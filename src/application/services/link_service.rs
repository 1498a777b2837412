//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::title::TitleFetcher;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Service for creating and retrieving shortened links.
///
/// Owns URL validation, collision-free code generation, and deduplication:
/// creating the same URL twice always yields the same link.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    titles: Arc<dyn TitleFetcher>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are advertised under.
    pub fn new(links: Arc<dyn LinkRepository>, titles: Arc<dyn TitleFetcher>, base_url: String) -> Self {
        Self {
            links,
            titles,
            base_url,
        }
    }

    /// Creates a short link, or returns the existing one for an already
    /// shortened URL.
    ///
    /// # Idempotence
    ///
    /// Creation is idempotent by URL: a second submission of the same URL
    /// returns the first link unchanged, with its original code and visit
    /// count.
    ///
    /// # Title derivation
    ///
    /// The title comes from the injected [`TitleFetcher`] and is strictly
    /// best-effort. A fetcher failure is logged and the link is created with
    /// an empty title; it never fails the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-http(s) URLs
    /// and [`AppError::Internal`] on store failures.
    pub async fn create_link(&self, url: String) -> Result<Link, AppError> {
        validate_url(&url).map_err(|e| {
            AppError::validation("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.links.find_by_url(&url).await? {
            return Ok(existing);
        }

        let title = match self.titles.fetch_title(&url).await {
            Ok(title) => title,
            Err(e) => {
                warn!("title derivation failed for {url}: {e}");
                String::new()
            }
        };

        let code = self.generate_unique_code().await?;

        self.links.create(NewLink { url, code, title }).await
    }

    /// Retrieves a link by its short code, if one exists.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.links.find_by_code(code).await
    }

    /// Returns all links for listing.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.links.list_all().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Generates a short code that no existing link uses, with bounded retry.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.links.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::title::MockTitleFetcher;
    use crate::utils::code_generator::CODE_LENGTH;
    use chrono::Utc;

    fn test_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(
            id,
            url.to_string(),
            code.to_string(),
            "example.com".to_string(),
            0,
            Utc::now(),
        )
    }

    fn ok_titles() -> MockTitleFetcher {
        let mut titles = MockTitleFetcher::new();
        titles
            .expect_fetch_title()
            .returning(|_| Ok("example.com".to_string()));
        titles
    }

    fn service(links: MockLinkRepository, titles: MockTitleFetcher) -> LinkService {
        LinkService::new(
            Arc::new(links),
            Arc::new(titles),
            "http://short.test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_url().times(1).returning(|_| Ok(None));
        links.expect_find_by_code().times(1).returning(|_| Ok(None));
        links.expect_create().times(1).returning(|new_link| {
            assert_eq!(new_link.code.len(), CODE_LENGTH);
            Ok(test_link(10, &new_link.code, &new_link.url))
        });

        let service = service(links, ok_titles());
        let link = service
            .create_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.visits, 0);
    }

    #[tokio::test]
    async fn test_create_link_is_idempotent_by_url() {
        let mut links = MockLinkRepository::new();

        let existing = test_link(5, "existing1", "https://example.com");
        links
            .expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        links.expect_create().times(0);

        let service = service(links, MockTitleFetcher::new());
        let link = service
            .create_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.id, 5);
        assert_eq!(link.code, "existing1");
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let service = service(MockLinkRepository::new(), MockTitleFetcher::new());

        let result = service.create_link("not-a-url".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_link_rejects_javascript_scheme() {
        let service = service(MockLinkRepository::new(), MockTitleFetcher::new());

        let result = service.create_link("javascript:alert(1)".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_link_title_failure_is_not_fatal() {
        let mut links = MockLinkRepository::new();
        let mut titles = MockTitleFetcher::new();

        titles
            .expect_fetch_title()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("fetch failed")));

        links.expect_find_by_url().times(1).returning(|_| Ok(None));
        links.expect_find_by_code().times(1).returning(|_| Ok(None));
        links.expect_create().times(1).returning(|new_link| {
            assert_eq!(new_link.title, "");
            Ok(test_link(1, &new_link.code, &new_link.url))
        });

        let service = service(links, titles);
        let result = service.create_link("https://example.com".to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_code_generation_retries_on_collision() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_url().times(1).returning(|_| Ok(None));

        let mut hits = 0;
        links.expect_find_by_code().times(3).returning(move |code| {
            hits += 1;
            if hits < 3 {
                Ok(Some(test_link(1, code, "https://other.com")))
            } else {
                Ok(None)
            }
        });

        links
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(test_link(2, &new_link.code, &new_link.url)));

        let service = service(links, ok_titles());
        assert!(
            service
                .create_link("https://example.com".to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_code_generation_gives_up_after_bounded_retries() {
        let mut links = MockLinkRepository::new();

        links.expect_find_by_url().times(1).returning(|_| Ok(None));
        links
            .expect_find_by_code()
            .times(10)
            .returning(|code| Ok(Some(test_link(1, code, "https://other.com"))));
        links.expect_create().times(0);

        let service = service(links, ok_titles());
        let result = service.create_link("https://example.com".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_short_url_joins_base_and_code() {
        let service = service(MockLinkRepository::new(), MockTitleFetcher::new());
        assert_eq!(service.short_url("abc123xy"), "http://short.test/abc123xy");
    }
}
