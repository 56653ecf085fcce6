use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::policy::ValidationIssue;
use crate::inbound::http::router::AppState;

/// Register a new account.
///
/// Replies with the auto-issued session so the client is signed in
/// immediately after registration.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|(_, ref session)| ApiSuccess::new(StatusCode::OK, session.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    password: Option<String>,
}

impl RegisterRequest {
    // Fields are optional so an absent one reports Required instead of
    // failing JSON extraction.
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok(RegisterCommand::new(username, password)),
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
