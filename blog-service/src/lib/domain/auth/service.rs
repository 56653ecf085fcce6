use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::session::models::Session;
use crate::domain::session::policy::LoginDecision;
use crate::domain::session::policy::SessionPolicy;
use crate::domain::session::ports::SessionStore;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::policy::CredentialPolicy;
use crate::domain::user::ports::UserStore;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Password hashing and verification run on the blocking pool so their
/// deliberate slowness never stalls the async runtime, and the
/// session read-then-write on login is serialized per user.
pub struct AuthService<US, SS>
where
    US: UserStore,
    SS: SessionStore,
{
    users: Arc<US>,
    sessions: Arc<SS>,
    authenticator: Arc<auth::Authenticator>,
    credential_policy: CredentialPolicy,
    session_policy: SessionPolicy,
    login_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl<US, SS> AuthService<US, SS>
where
    US: UserStore,
    SS: SessionStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `sessions` - Session persistence implementation
    /// * `authenticator` - Credential hashing and verification
    /// * `credential_policy` - Username and password input policy
    /// * `session_policy` - Session TTL and reuse policy
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(
        users: Arc<US>,
        sessions: Arc<SS>,
        authenticator: Arc<auth::Authenticator>,
        credential_policy: CredentialPolicy,
        session_policy: SessionPolicy,
    ) -> Self {
        Self {
            users,
            sessions,
            authenticator,
            credential_policy,
            session_policy,
            login_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Hand out the per-user lock guarding the login session sequence.
    // TODO: evict entries for users with no recent login
    async fn login_lock(&self, user_id: UserId) -> Arc<Mutex<()>> {
        let mut locks = self.login_locks.lock().await;
        Arc::clone(locks.entry(user_id).or_default())
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .map_err(AuthError::from)
    }

    async fn verify_password(
        &self,
        password: String,
        stored_hash: Option<String>,
    ) -> Result<bool, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, stored_hash.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .map_err(AuthError::from)
    }
}

#[async_trait]
impl<US, SS> AuthServicePort for AuthService<US, SS>
where
    US: UserStore,
    SS: SessionStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<(User, Session), AuthError> {
        // Reserved names are rejected as reserved whatever the rest of
        // the input looks like.
        if self.credential_policy.is_reserved(&command.username) {
            return Err(AuthError::ReservedUsername);
        }

        let issues = self
            .credential_policy
            .validate(&command.username, &command.password);
        if !issues.is_empty() {
            return Err(AuthError::Validation(issues));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = self
            .users
            .create(User {
                id: UserId::new(),
                username: command.username,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        // A fresh account holds no session yet, so issue one directly.
        let session = self.sessions.create(user.id).await?;

        Ok((user, session))
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError> {
        let issues = self
            .credential_policy
            .validate(&command.username, &command.password);
        if !issues.is_empty() {
            return Err(AuthError::Validation(issues));
        }

        let user = self.users.find_by_username(&command.username).await?;
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());

        // Verification runs even when the username is unknown, so the
        // two rejection paths stay indistinguishable.
        let is_valid = self.verify_password(command.password, stored_hash).await?;

        let user = match user {
            Some(user) if is_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        // Serialize the session read-then-write per user; otherwise two
        // concurrent logins could both observe "no live session" and
        // each mint a token.
        let lock = self.login_lock(user.id).await;
        let _guard = lock.lock().await;

        let existing = self.sessions.find_by_user(user.id).await?;
        match self.session_policy.decide_login(existing, Utc::now()) {
            LoginDecision::Reuse(session) => Ok(session),
            LoginDecision::ReplaceExpired(stale_id) => {
                self.sessions.delete(stale_id).await?;
                Ok(self.sessions.create(user.id).await?)
            }
            LoginDecision::IssueNew => Ok(self.sessions.create(user.id).await?),
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        let token = token.ok_or(AuthError::Unauthorized)?;

        let session = self
            .sessions
            .find_by_token(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if self.session_policy.is_expired(&session, Utc::now()) {
            // An expired session cannot be logged out, but its row no
            // longer serves any purpose.
            self.sessions.delete(session.id).await?;
            return Err(AuthError::SessionExpired);
        }

        self.sessions.delete(session.id).await?;

        Ok(())
    }

    async fn authorize(&self, token: &str) -> Result<UserId, AuthError> {
        let session = self
            .sessions
            .find_by_token(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if self.session_policy.is_expired(&session, Utc::now()) {
            return Err(AuthError::Unauthorized);
        }

        Ok(session.user_id)
    }
}
