//! In-memory repository implementations.
//!
//! Back the integration tests and local development runs without Postgres.
//! Each repository guards its rows with a `Mutex`, which gives the same
//! per-operation atomicity the database implementations rely on.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Click, Link, NewLink, NewUser, Session, User};
use crate::domain::repositories::{
    ClickRepository, LinkRepository, SessionRepository, UserRepository,
};
use crate::error::AppError;

/// In-memory link repository.
pub struct MemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().expect("link store poisoned");

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::internal(
                "Duplicate code",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            url: new_link.url,
            code: new_link.code,
            title: new_link.title,
            visits: 0,
            created_at: Utc::now(),
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().expect("link store poisoned");
        Ok(links.iter().find(|l| l.code == code).cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().expect("link store poisoned");
        Ok(links.iter().find(|l| l.url == url).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().expect("link store poisoned");
        Ok(links.iter().find(|l| l.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().expect("link store poisoned");
        Ok(links.clone())
    }

    async fn increment_visits(&self, id: i64) -> Result<Link, AppError> {
        let mut links = self.links.lock().expect("link store poisoned");

        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;

        link.visits += 1;
        Ok(link.clone())
    }
}

/// In-memory click repository.
pub struct MemoryClickRepository {
    clicks: Mutex<Vec<Click>>,
    next_id: AtomicI64,
}

impl MemoryClickRepository {
    pub fn new() -> Self {
        Self {
            clicks: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn create(&self, link_id: i64) -> Result<Click, AppError> {
        let mut clicks = self.clicks.lock().expect("click store poisoned");

        let click = Click {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            link_id,
            created_at: Utc::now(),
        };
        clicks.push(click.clone());

        Ok(click)
    }

    async fn count_for_link(&self, link_id: i64) -> Result<i64, AppError> {
        let clicks = self.clicks.lock().expect("click store poisoned");
        Ok(clicks.iter().filter(|c| c.link_id == link_id).count() as i64)
    }
}

/// In-memory user repository.
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().expect("user store poisoned");

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::internal(
                "Duplicate username",
                json!({ "username": new_user.username }),
            ));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            password_hash: new_user.password_hash,
            salt: new_user.salt,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().expect("user store poisoned");
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

/// In-memory session repository.
#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn find(&self, hash: &str) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.lock().expect("session store poisoned");
        Ok(sessions.get(hash).cloned())
    }

    async fn create(&self, hash: &str) -> Result<Session, AppError> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let session = Session::anonymous(hash.to_string());
        sessions.insert(hash.to_string(), session.clone());
        Ok(session)
    }

    async fn bind_user(&self, hash: &str, user_id: i64) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        if let Some(session) = sessions.get_mut(hash) {
            session.user_id = Some(user_id);
        }
        Ok(())
    }

    async fn delete(&self, hash: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        sessions.remove(hash);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_link_create_and_lookup() {
        let repo = MemoryLinkRepository::new();
        let link = repo
            .create(NewLink {
                url: "https://example.com".to_string(),
                code: "abc123xy".to_string(),
                title: "example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(link.visits, 0);
        assert!(
            repo.find_by_code("abc123xy")
                .await
                .unwrap()
                .is_some_and(|l| l.id == link.id)
        );
        assert!(
            repo.find_by_url("https://example.com")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_by_id(link.id)
                .await
                .unwrap()
                .is_some_and(|l| l.code == "abc123xy")
        );
        assert!(repo.find_by_code("missing1").await.unwrap().is_none());
        assert!(repo.find_by_id(link.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_link_duplicate_code_rejected() {
        let repo = MemoryLinkRepository::new();
        let new = |url: &str| NewLink {
            url: url.to_string(),
            code: "samecode".to_string(),
            title: String::new(),
        };

        repo.create(new("https://a.com")).await.unwrap();
        assert!(repo.create(new("https://b.com")).await.is_err());
    }

    #[tokio::test]
    async fn test_increment_visits() {
        let repo = MemoryLinkRepository::new();
        let link = repo
            .create(NewLink {
                url: "https://example.com".to_string(),
                code: "abc123xy".to_string(),
                title: String::new(),
            })
            .await
            .unwrap();

        let updated = repo.increment_visits(link.id).await.unwrap();
        assert_eq!(updated.visits, 1);

        let updated = repo.increment_visits(link.id).await.unwrap();
        assert_eq!(updated.visits, 2);

        assert!(repo.increment_visits(999).await.is_err());
    }

    #[tokio::test]
    async fn test_click_append_and_count() {
        let repo = MemoryClickRepository::new();
        repo.create(1).await.unwrap();
        repo.create(1).await.unwrap();
        repo.create(2).await.unwrap();

        assert_eq!(repo.count_for_link(1).await.unwrap(), 2);
        assert_eq!(repo.count_for_link(2).await.unwrap(), 1);
        assert_eq!(repo.count_for_link(3).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let repo = MemorySessionRepository::new();

        let session = repo.create("tok123").await.unwrap();
        assert!(!session.is_authenticated());

        repo.bind_user("tok123", 7).await.unwrap();
        let session = repo.find("tok123").await.unwrap().unwrap();
        assert_eq!(session.user_id, Some(7));

        repo.delete("tok123").await.unwrap();
        assert!(repo.find("tok123").await.unwrap().is_none());

        // deleting an unknown token is not an error
        repo.delete("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_user_unique_username() {
        let repo = MemoryUserRepository::new();
        let new = || NewUser {
            username: "alice".to_string(),
            password_hash: "h".to_string(),
            salt: "s".to_string(),
        };

        repo.create(new()).await.unwrap();
        assert!(repo.create(new()).await.is_err());
        assert!(repo.find_by_username("alice").await.unwrap().is_some());
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }
}
