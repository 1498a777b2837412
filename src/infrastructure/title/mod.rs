//! Page title derivation for newly shortened links.
//!
//! Title lookup is an external collaborator behind a capability trait. The
//! default implementation derives a readable title from the URL itself; an
//! implementation that fetches the real page `<title>` would slot in here.
//! Either way, failures never block link creation.

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// Capability interface for deriving a link title at creation time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleFetcher: Send + Sync {
    /// Produces a best-effort title for `url`.
    async fn fetch_title(&self, url: &str) -> Result<String>;
}

/// Derives a title from the URL's host and path, without touching the network.
#[derive(Debug, Default)]
pub struct UrlTitleFetcher;

impl UrlTitleFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TitleFetcher for UrlTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url)?;

        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL has no host"))?;

        let title = match parsed.path() {
            "" | "/" => host.to_string(),
            path => format!("{host}{path}"),
        };

        Ok(title)
    }
}
