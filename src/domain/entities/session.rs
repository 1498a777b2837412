//! Session entity binding an opaque cookie token to a user.

/// A browser session, keyed by its opaque token.
///
/// Anonymous and authenticated sessions share the same shape; authentication
/// only sets `user_id`. One token persists across requests via the
/// `shortlyid` cookie.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub hash: String,
    pub user_id: Option<i64>,
}

impl Session {
    /// A fresh anonymous session for the given token.
    pub fn anonymous(hash: String) -> Self {
        Self {
            hash,
            user_id: None,
        }
    }

    /// Returns true once a user id has been bound by login or signup.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}
