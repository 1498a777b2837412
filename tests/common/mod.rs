#![allow(dead_code)]

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig};
use shortly::application::services::{AuthService, LinkService, ResolverService};
use shortly::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemorySessionRepository, MemoryUserRepository,
};
use shortly::infrastructure::title::UrlTitleFetcher;
use shortly::routes;
use shortly::state::AppState;
use shortly::utils::password::Sha256Verifier;

pub const TEST_BASE_URL: &str = "http://short.test";

/// Test fixture: a running in-memory app plus handles to its stores.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<MemoryLinkRepository>,
    pub clicks: Arc<MemoryClickRepository>,
    pub users: Arc<MemoryUserRepository>,
    pub sessions: Arc<MemorySessionRepository>,
}

/// Builds the full router over in-memory repositories, with a cookie jar so
/// the session token persists across requests like a browser.
pub fn spawn_app() -> TestApp {
    let links = Arc::new(MemoryLinkRepository::new());
    let clicks = Arc::new(MemoryClickRepository::new());
    let users = Arc::new(MemoryUserRepository::new());
    let sessions = Arc::new(MemorySessionRepository::new());

    let link_service = Arc::new(LinkService::new(
        links.clone(),
        Arc::new(UrlTitleFetcher::new()),
        TEST_BASE_URL.to_string(),
    ));
    let auth_service = Arc::new(AuthService::new(
        sessions.clone(),
        users.clone(),
        Arc::new(Sha256Verifier::new()),
    ));
    let resolver_service = Arc::new(ResolverService::new(links.clone(), clicks.clone()));

    let state = AppState::new(link_service, auth_service, resolver_service);

    let config = TestServerConfig {
        save_cookies: true,
        ..Default::default()
    };
    let server = TestServer::new_with_config(routes::router(state), config).unwrap();

    TestApp {
        server,
        links,
        clicks,
        users,
        sessions,
    }
}
