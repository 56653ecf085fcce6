use async_trait::async_trait;
use auth::SessionToken;
use auth::TokenGenerator;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;
use crate::domain::session::ports::SessionStore;
use crate::domain::user::models::UserId;

pub struct PostgresSessionStore {
    pool: PgPool,
    token_generator: TokenGenerator,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            token_generator: TokenGenerator::new(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    user_id: Uuid,
    token: String,
    created_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            id: SessionId(row.id),
            user_id: UserId(row.user_id),
            token: SessionToken::from(row.token),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn create(&self, user_id: UserId) -> Result<Session, SessionError> {
        let session = Session {
            id: SessionId::new(),
            user_id,
            token: self.token_generator.generate(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, token, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id.0)
        .bind(session.user_id.0)
        .bind(session.token.as_str())
        .bind(session.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, token, created_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(row.map(Session::from))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Session>, SessionError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, token, created_at
            FROM sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(row.map(Session::from))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, SessionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE created_at < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
