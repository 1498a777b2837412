//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`, `GET /create` - link-creation page
//! - `GET  /links`           - all links as JSON
//! - `POST /links`           - shorten a URL
//! - `GET  /login`, `/signup` - forms; `POST` versions run the auth flows
//! - `GET  /logout`          - end the session
//! - `GET  /static/*`        - static assets
//! - `GET  /{code}`          - short link redirect, matched after all other routes
//!
//! # Middleware
//!
//! - **Session** - resolves or creates the `shortlyid` session for every request
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api::handlers::{
    create_link_handler, index_handler, list_links_handler, login_handler, login_page_handler,
    logout_handler, redirect_handler, signup_handler, signup_page_handler,
};
use crate::api::middleware::{session, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// The route set and middleware stack, before path normalization.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/create", get(index_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/signup", get(signup_page_handler).post(signup_handler))
        .route("/logout", get(logout_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
