use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that resolves the Authorization header to a live session
/// and adds the session owner to request extensions.
///
/// Handlers behind it see only the user ID; the token itself goes no
/// further than this layer.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(req.headers()).ok_or_else(unauthorized_response)?;

    let user_id = state
        .auth_service
        .authorize(token)
        .await
        .map_err(|e| match e {
            AuthError::Internal(detail) => {
                tracing::error!("Session lookup failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
            _ => {
                tracing::warn!("Authorization rejected: {}", e);
                unauthorized_response()
            }
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Pull the session token out of the Authorization header.
///
/// Clients send the raw token value; a `Bearer ` prefix is also
/// tolerated.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::AUTHORIZATION,
            HeaderValue::from_str(value).expect("Invalid header value"),
        );
        headers
    }

    #[test]
    fn test_extract_token_accepts_raw_value() {
        let headers = headers_with_authorization("abc123");

        assert_eq!(extract_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_extract_token_strips_bearer_prefix() {
        let headers = headers_with_authorization("Bearer abc123");

        assert_eq!(extract_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_extract_token_rejects_missing_header() {
        let headers = HeaderMap::new();

        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_rejects_empty_value() {
        let headers = headers_with_authorization("Bearer ");

        assert_eq!(extract_token(&headers), None);
    }
}
