use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostStore: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Arguments
    /// * `post` - Post entity to store
    ///
    /// # Returns
    /// Created post entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve a post by ID.
    ///
    /// # Arguments
    /// * `id` - Post ID to look up
    ///
    /// # Returns
    /// Optional post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts, most recent first.
    ///
    /// # Returns
    /// Vector of post entities ordered by creation time descending
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self) -> Result<Vec<Post>, PostError>;

    /// Replace the title and content of a post and stamp its update time.
    ///
    /// # Arguments
    /// * `id` - Post ID to update
    /// * `title` - Replacement title
    /// * `content` - Replacement content
    ///
    /// # Returns
    /// Updated post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: PostId, title: String, content: String)
        -> Result<Option<Post>, PostError>;

    /// Remove a post from storage.
    ///
    /// # Arguments
    /// * `id` - Post ID to delete
    ///
    /// # Returns
    /// Whether a post was present and removed
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: PostId) -> Result<bool, PostError>;
}
