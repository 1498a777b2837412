//! Handlers rendering the HTML pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the link-creation page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Template for the login form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Template for the signup form.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
struct SignupTemplate {}

/// Renders the link-creation page.
///
/// Served on both `GET /` and `GET /create`.
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Renders the login form. `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}

/// Renders the signup form. `GET /signup`
pub async fn signup_page_handler() -> impl IntoResponse {
    SignupTemplate {}
}
