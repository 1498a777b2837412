//! Handlers for the links JSON API.

use axum::{Json, extract::State};

use crate::api::dto::{CreateLinkRequest, LinkResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /links` → 200 with a JSON array, 500 on store failure.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    let body = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            LinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(body))
}

/// Shortens a URL, or returns the existing link for an already shortened one.
///
/// # Endpoint
///
/// `POST /links` with `{"url": "..."}`, or the equivalent form-encoded
/// body from the index page.
///
/// # Responses
///
/// - 200 with the link JSON (new or pre-existing; creation is idempotent
///   by URL)
/// - 404 when the submitted URL is malformed or not http(s)
/// - 500 on store failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.create_link(req.url).await?;

    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}
