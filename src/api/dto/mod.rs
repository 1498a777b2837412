//! Request/response DTOs for the HTTP surface.

pub mod auth;
pub mod link;

pub use auth::Credentials;
pub use link::{CreateLinkRequest, LinkResponse};
