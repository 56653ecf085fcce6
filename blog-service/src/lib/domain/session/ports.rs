use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;
use crate::domain::user::models::UserId;

/// Persistence operations for the session aggregate.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Create and persist a session for a user.
    ///
    /// Mints a fresh unguessable token and records the creation time.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the new session
    ///
    /// # Returns
    /// Created session entity carrying the new token
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user_id: UserId) -> Result<Session, SessionError>;

    /// Retrieve a session by exact token value.
    ///
    /// # Arguments
    /// * `token` - Raw token string presented by the client
    ///
    /// # Returns
    /// Optional session entity (None if no session carries the token)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, SessionError>;

    /// Retrieve the most recently created session for a user.
    ///
    /// # Arguments
    /// * `user_id` - Session owner
    ///
    /// # Returns
    /// Optional session entity (None if the user holds no session)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Session>, SessionError>;

    /// Remove a session from storage.
    ///
    /// Idempotent: deleting a session that is already absent succeeds.
    ///
    /// # Arguments
    /// * `id` - Session ID to delete
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: SessionId) -> Result<(), SessionError>;

    /// Remove every session created before the cutoff.
    ///
    /// # Arguments
    /// * `cutoff` - Creation-time threshold; strictly older rows go
    ///
    /// # Returns
    /// Number of sessions removed
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, SessionError>;
}
