use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::domain::auth::models::LoginCommand;
use crate::domain::user::policy::ValidationIssue;
use crate::inbound::http::router::AppState;

/// Authenticate with username and password.
///
/// Replies with the live session for the account, which is only a fresh
/// one when no live session existed.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok(LoginCommand::new(username, password)),
            (username, password) => {
                let mut issues = Vec::new();
                if username.is_none() {
                    issues.push(ValidationIssue::required("username"));
                }
                if password.is_none() {
                    issues.push(ValidationIssue::required("password"));
                }
                Err(ApiError::Validation(issues))
            }
        }
    }
}
