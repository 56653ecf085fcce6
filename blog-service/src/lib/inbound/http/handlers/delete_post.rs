use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use super::post_not_found;
use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let post_id = parse_post_id(&post_id)?;

    let deleted = state
        .post_store
        .delete(post_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(post_not_found());
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Post deleted".to_string(),
        },
    ))
}
