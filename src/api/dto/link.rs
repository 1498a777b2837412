//! DTOs for the links endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    pub url: String,
}

/// A link as exposed over the JSON API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub title: String,
    pub visits: i64,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response from an entity plus the advertised short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            url: link.url,
            code: link.code,
            title: link.title,
            visits: link.visits,
            short_url,
            created_at: link.created_at,
        }
    }
}
