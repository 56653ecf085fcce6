use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use super::validate_post_fields;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Create a post authored by the authenticated user.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let (title, content) = validate_post_fields(body.title, body.content)?;

    let now = Utc::now();
    let post = Post {
        id: PostId::new(),
        author_id: user.user_id,
        title,
        content,
        created_at: now,
        updated_at: now,
    };

    state
        .post_store
        .create(post)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for creating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: Option<String>,
    content: Option<String>,
}
