use std::fmt;

use auth::SessionToken;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// Session aggregate entity.
///
/// Represents an issued login session. Immutable once created; a
/// session ends by deletion (logout or sweep) or by aging past the
/// configured TTL, never by mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub token: SessionToken,
    pub created_at: DateTime<Utc>,
}

/// Session unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    ///
    /// # Returns
    /// SessionId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
