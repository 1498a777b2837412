//! Session middleware: one resolved session per request.
//!
//! Every request passes through here before dispatch. The `shortlyid`
//! cookie is parsed once at the boundary and the resolved session is
//! threaded to handlers through a request extension; nothing downstream
//! touches cookies or global state.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "shortlyid";

/// The request's session, as resolved by [`layer`].
///
/// Handlers take this via `Extension<CurrentSession>`.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub hash: String,
    pub user_id: Option<i64>,
}

impl CurrentSession {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Resolves or creates the session for an incoming request.
///
/// # Flow
///
/// 1. Extract the `shortlyid` cookie, ignoring any other cookies.
/// 2. Ask the auth service for the matching session; an absent or
///    unrecognized token yields a fresh anonymous session.
/// 3. Insert [`CurrentSession`] into the request extensions.
/// 4. After the handler runs, append `Set-Cookie` if the session is new.
///
/// # Errors
///
/// Returns [`AppError::Internal`] (500) if the session store fails.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        });

    let (session, created) = st.auth_service.ensure_session(token.as_deref()).await?;

    req.extensions_mut().insert(CurrentSession {
        hash: session.hash.clone(),
        user_id: session.user_id,
    });

    let mut res = next.run(req).await;

    if created && let Ok(value) = HeaderValue::from_str(&set_cookie_value(&session.hash)) {
        res.headers_mut().append(SET_COOKIE, value);
    }

    Ok(res)
}

/// `Set-Cookie` value installing a session token.
pub fn set_cookie_value(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly")
}

/// `Set-Cookie` value clearing the session cookie on logout.
pub fn clear_cookie_value() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}
