use thiserror::Error;

/// Error for user persistence operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
