//! Session-based authentication service.
//!
//! Owns the session lifecycle exclusively: creation on first contact,
//! user binding on login/signup, deletion on logout. Password verification
//! is delegated to an injected [`PasswordVerifier`]; this service never
//! stores or compares plaintext beyond the single comparison call.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{NewUser, Session};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::{PasswordVerifier, generate_salt};
use crate::utils::session_token::generate_token;

/// Outcome of a login attempt.
///
/// Unknown usernames and wrong passwords are deliberately indistinguishable:
/// both collapse into [`LoginOutcome::BadCredentials`].
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { user_id: i64 },
    BadCredentials,
}

/// Outcome of a signup attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Success { user_id: i64 },
    UsernameTaken,
}

/// Service implementing the auth gate over sessions and users.
pub struct AuthService {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn PasswordVerifier>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        verifier: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self {
            sessions,
            users,
            verifier,
        }
    }

    /// Resolves the session for a request, creating a fresh anonymous one
    /// when no recognized token is presented.
    ///
    /// Returns the session and whether it was newly created (in which case
    /// the caller must set the cookie).
    pub async fn ensure_session(&self, token: Option<&str>) -> Result<(Session, bool), AppError> {
        if let Some(token) = token
            && let Some(session) = self.sessions.find(token).await?
        {
            return Ok((session, false));
        }

        let token = generate_token();
        let session = self.sessions.create(&token).await?;
        debug!("created anonymous session");

        Ok((session, true))
    }

    /// Attempts to log a user in and bind them to the current session.
    ///
    /// On success the session transitions to authenticated; on bad
    /// credentials the session is left untouched.
    ///
    /// # Errors
    ///
    /// Only store failures surface as errors; credential mismatches are a
    /// normal [`LoginOutcome`].
    pub async fn login(
        &self,
        session_hash: &str,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(LoginOutcome::BadCredentials);
        };

        if !self
            .verifier
            .verify(password, &user.password_hash, &user.salt)
        {
            return Ok(LoginOutcome::BadCredentials);
        }

        self.sessions.bind_user(session_hash, user.id).await?;

        Ok(LoginOutcome::Success { user_id: user.id })
    }

    /// Registers a new user and binds them to the current session.
    ///
    /// # Errors
    ///
    /// Only store failures surface as errors; a taken username is a normal
    /// [`SignupOutcome`].
    pub async fn signup(
        &self,
        session_hash: &str,
        username: &str,
        password: &str,
    ) -> Result<SignupOutcome, AppError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Ok(SignupOutcome::UsernameTaken);
        }

        let salt = generate_salt();
        let password_hash = self.verifier.hash(password, &salt);

        let user = self
            .users
            .create(NewUser {
                username: username.to_string(),
                password_hash,
                salt,
            })
            .await?;

        self.sessions.bind_user(session_hash, user.id).await?;

        Ok(SignupOutcome::Success { user_id: user.id })
    }

    /// Deletes the session record for a logout.
    pub async fn logout(&self, session_hash: &str) -> Result<(), AppError> {
        self.sessions.delete(session_hash).await
    }
}
