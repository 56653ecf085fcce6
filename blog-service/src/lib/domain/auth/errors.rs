use thiserror::Error;

use crate::domain::session::errors::SessionError;
use crate::domain::user::errors::UserError;
use crate::domain::user::policy::ValidationIssue;

/// Top-level error for authentication operations.
///
/// Policy failures carry user-safe messages; anything unexpected from
/// storage or hashing collapses into `Internal`, whose detail is logged
/// at the boundary and never shown to callers.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Validation failed")]
    Validation(Vec<ValidationIssue>),

    #[error("Username is reserved and cannot be used")]
    ReservedUsername,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Session expired")]
    SessionExpired,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameTaken(_) => AuthError::UsernameTaken,
            UserError::DatabaseError(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::DatabaseError(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
