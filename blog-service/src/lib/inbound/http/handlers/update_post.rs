use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_post_id;
use super::post_not_found;
use super::validate_post_fields;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::inbound::http::router::AppState;

/// Replace the title and content of a post.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let (title, content) = validate_post_fields(body.title, body.content)?;

    state
        .post_store
        .update(post_id, title, content)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(post_not_found)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

/// HTTP request body for updating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequest {
    title: Option<String>,
    content: Option<String>,
}
