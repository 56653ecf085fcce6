use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
