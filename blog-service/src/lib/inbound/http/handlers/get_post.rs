use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use super::post_not_found;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = parse_post_id(&post_id)?;

    state
        .post_store
        .find_by_id(post_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(post_not_found)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
