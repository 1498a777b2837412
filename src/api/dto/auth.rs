//! DTOs for the login and signup forms.

use serde::Deserialize;

/// Credentials submitted by the login and signup forms.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
