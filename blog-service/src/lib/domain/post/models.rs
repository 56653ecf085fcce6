use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// Unique identifier for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post authored by a registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
