//! Handlers for the login, signup, and logout flows.

use axum::{
    Extension, Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
};

use crate::api::dto::Credentials;
use crate::api::middleware::session::{CurrentSession, clear_cookie_value};
use crate::application::services::{LoginOutcome, SignupOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// Attempts a login and redirects by outcome.
///
/// # Endpoint
///
/// `POST /login` (form-encoded `username` + `password`).
///
/// Success binds the user to the current session and redirects to `/`.
/// Unknown usernames and wrong passwords both redirect to `/login` with no
/// distinction. Store failures answer 500.
pub async fn login_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Form(creds): Form<Credentials>,
) -> Result<Redirect, AppError> {
    let outcome = state
        .auth_service
        .login(&session.hash, &creds.username, &creds.password)
        .await?;

    match outcome {
        LoginOutcome::Success { .. } => Ok(Redirect::to("/")),
        LoginOutcome::BadCredentials => Ok(Redirect::to("/login")),
    }
}

/// Registers a user and redirects by outcome.
///
/// # Endpoint
///
/// `POST /signup` (form-encoded `username` + `password`).
///
/// Success creates the user, binds the current session, and redirects to
/// `/`; a taken username redirects back to `/signup`.
pub async fn signup_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Form(creds): Form<Credentials>,
) -> Result<Redirect, AppError> {
    let outcome = state
        .auth_service
        .signup(&session.hash, &creds.username, &creds.password)
        .await?;

    match outcome {
        SignupOutcome::Success { .. } => Ok(Redirect::to("/")),
        SignupOutcome::UsernameTaken => Ok(Redirect::to("/signup")),
    }
}

/// Ends the session: deletes the record, clears the cookie, redirects to
/// the login page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, AppError> {
    state.auth_service.logout(&session.hash).await?;

    Ok((
        [(SET_COOKIE, clear_cookie_value())],
        Redirect::to("/login"),
    ))
}
