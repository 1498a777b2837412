//! PostgreSQL implementation of the session repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// PostgreSQL repository for browser sessions.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find(&self, hash: &str) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT hash, user_id
            FROM sessions
            WHERE hash = $1
            "#,
        )
        .bind(hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(session)
    }

    async fn create(&self, hash: &str) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (hash)
            VALUES ($1)
            RETURNING hash, user_id
            "#,
        )
        .bind(hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(session)
    }

    async fn bind_user(&self, hash: &str, user_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET user_id = $2
            WHERE hash = $1
            "#,
        )
        .bind(hash)
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE hash = $1")
            .bind(hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
