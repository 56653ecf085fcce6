use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The uniqueness check on the username and the insert are a single
    /// atomic step; of two concurrent creates with the same username,
    /// exactly one succeeds.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for (case-sensitive, exact match)
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}
