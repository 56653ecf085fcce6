use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::extract_token;
use crate::inbound::http::router::AppState;

/// End the session named by the Authorization header.
///
/// Reads the header itself instead of sitting behind the auth
/// middleware: an expired session must surface as `Session expired`
/// here, which the middleware collapses into a plain 401.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    state
        .auth_service
        .logout(extract_token(&headers))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData {
                    message: "Logged out".to_string(),
                },
            )
        })
}
