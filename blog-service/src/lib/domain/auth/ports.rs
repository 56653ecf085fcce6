use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::session::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for authentication service operations.
///
/// Covers the full session lifecycle: an anonymous caller registers or
/// logs in to become authenticated, and returns to anonymous through
/// logout or expiry.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first session.
    ///
    /// # Arguments
    /// * `command` - Raw username and password
    ///
    /// # Returns
    /// The created user and a freshly issued session for it
    ///
    /// # Errors
    /// * `Validation` - Username or password below minimum length
    /// * `ReservedUsername` - Username is on the reserved list
    /// * `UsernameTaken` - Username is already registered
    /// * `Internal` - Storage or hashing failed
    async fn register(&self, command: RegisterCommand) -> Result<(User, Session), AuthError>;

    /// Authenticate an account and return its session.
    ///
    /// A live session is reused as-is; an expired one is replaced. The
    /// caller cannot tell whether the username was unknown or the
    /// password wrong.
    ///
    /// # Arguments
    /// * `command` - Raw username and password
    ///
    /// # Returns
    /// The user's session, reused or freshly issued
    ///
    /// # Errors
    /// * `Validation` - Username or password below minimum length
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Internal` - Storage or hashing failed
    async fn login(&self, command: LoginCommand) -> Result<Session, AuthError>;

    /// End the session identified by the token.
    ///
    /// # Arguments
    /// * `token` - Token from the request, when one was presented
    ///
    /// # Errors
    /// * `Unauthorized` - No token presented, or no session carries it
    /// * `SessionExpired` - Session exists but aged past the TTL; its
    ///   row is purged as a side effect
    /// * `Internal` - Storage failed
    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError>;

    /// Resolve a token to the user it authenticates.
    ///
    /// Expired sessions are indistinguishable from absent ones here;
    /// only `logout` reports expiry as its own error.
    ///
    /// # Arguments
    /// * `token` - Raw token string
    ///
    /// # Returns
    /// ID of the authenticated user
    ///
    /// # Errors
    /// * `Unauthorized` - Token is unknown or the session has expired
    /// * `Internal` - Storage failed
    async fn authorize(&self, token: &str) -> Result<UserId, AuthError>;
}
