//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AuthService, LinkService, ResolverService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgClickRepository, PgLinkRepository, PgSessionRepository, PgUserRepository,
};
use crate::infrastructure::title::UrlTitleFetcher;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::password::Sha256Verifier;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        Arc::new(UrlTitleFetcher::new()),
        config.base_url.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        session_repository,
        user_repository,
        Arc::new(Sha256Verifier::new()),
    ));
    let resolver_service = Arc::new(ResolverService::new(link_repository, click_repository));

    let state = AppState::new(link_service, auth_service, resolver_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
