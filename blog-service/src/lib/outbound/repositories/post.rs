use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostStore;
use crate::domain::user::models::UserId;

pub struct PostgresPostStore {
    pool: PgPool,
}

impl PostgresPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId(row.id),
            author_id: UserId(row.author_id),
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.0)
        .bind(post.author_id.0)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, title, content, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(row.map(Post::from))
    }

    async fn list(&self) -> Result<Vec<Post>, PostError> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, title, content, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update(
        &self,
        id: PostId,
        title: String,
        content: String,
    ) -> Result<Option<Post>, PostError> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            UPDATE posts
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, author_id, title, content, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(row.map(Post::from))
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
