use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenGenerator;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostStore;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;
use crate::domain::session::ports::SessionStore;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;

/// User storage backed by a process-local map.
///
/// The uniqueness check and the insert run under a single write guard,
/// so concurrent registrations of one username cannot both pass.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameTaken(user.username));
        }

        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;

        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

/// Session storage backed by a process-local map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    token_generator: TokenGenerator,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: UserId) -> Result<Session, SessionError> {
        let session = Session {
            id: SessionId::new(),
            user_id,
            token: self.token_generator.generate(),
            created_at: Utc::now(),
        };

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());

        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .values()
            .find(|s| s.token.as_str() == token)
            .cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Session>, SessionError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions.write().await.remove(&id);

        Ok(())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, SessionError> {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| s.created_at >= cutoff);

        Ok((before - sessions.len()) as u64)
    }
}

/// Post storage backed by a process-local map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        self.posts.write().await.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, PostError> {
        let posts = self.posts.read().await;

        let mut posts: Vec<Post> = posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts)
    }

    async fn update(
        &self,
        id: PostId,
        title: String,
        content: String,
    ) -> Result<Option<Post>, PostError> {
        let mut posts = self.posts.write().await;

        Ok(posts.get_mut(&id).map(|post| {
            post.title = title;
            post.content = content;
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostError> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}
