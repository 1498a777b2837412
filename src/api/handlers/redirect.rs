//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` - registered last, so any path that is not a known route
/// is treated as a candidate code.
///
/// # Behavior
///
/// - Known code → 307 to the stored URL, after click recording and the
///   visit increment (both best-effort).
/// - Unknown code → redirect to `/`, the not-found fallback.
/// - Store failure on lookup → 500.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.resolver_service.resolve(&code).await? {
        Some(url) => Ok(Redirect::temporary(&url)),
        None => Ok(Redirect::to("/")),
    }
}
