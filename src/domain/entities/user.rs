//! User entity for the signup/login flow.

use chrono::{DateTime, Utc};

/// A registered user. Immutable after signup.
///
/// Only the salted hash of the password is ever stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
}
