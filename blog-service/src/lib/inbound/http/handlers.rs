use auth::SessionToken;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::session::models::Session;
use crate::domain::user::policy::ValidationIssue;

pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod login;
pub mod logout;
pub mod register;
pub mod update_post;

/// Successful response carrying a flat JSON body.
///
/// Clients consume the payload directly, so there is no envelope around
/// it; the status code travels only in the HTTP status line.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error responses and their wire shapes.
///
/// `Validation` renders as `{"errors": [{"field", "message"}]}`; every
/// other variant renders as `{"message": ...}`. `InternalServerError`
/// keeps its detail out of the body and logs it instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Validation(Vec<ValidationIssue>),
    UnprocessableEntity(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": issues })),
            )
                .into_response(),
            ApiError::UnprocessableEntity(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(issues) => ApiError::Validation(issues),
            AuthError::ReservedUsername => ApiError::Validation(vec![ValidationIssue {
                field: "username".to_string(),
                message: err.to_string(),
            }]),
            AuthError::UsernameTaken => ApiError::UnprocessableEntity(err.to_string()),
            AuthError::InvalidCredentials => ApiError::UnprocessableEntity(err.to_string()),
            AuthError::Unauthorized => ApiError::Unauthorized(err.to_string()),
            AuthError::SessionExpired => ApiError::Unauthorized(err.to_string()),
            AuthError::Internal(detail) => ApiError::InternalServerError(detail),
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::DatabaseError(detail) => ApiError::InternalServerError(detail),
        }
    }
}

/// Plain `{"message": ...}` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

/// Session payload returned by register and login.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub id: String,
    pub user_id: String,
    pub token: SessionToken,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionData {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.to_string(),
            user_id: session.user_id.to_string(),
            token: session.token.clone(),
            created_at: session.created_at,
        }
    }
}

/// Post payload returned by the post handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Parse a path segment as a post ID.
///
/// An unparseable segment cannot name any post, so it reports the same
/// 404 as a missing row.
pub(crate) fn parse_post_id(value: &str) -> Result<PostId, ApiError> {
    Uuid::parse_str(value)
        .map(PostId)
        .map_err(|_| post_not_found())
}

pub(crate) fn post_not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

/// Check the title and content fields shared by post create and update.
///
/// Missing fields report `Required`; empty strings report the minimum
/// length. Issues accumulate so one response covers both fields.
pub(crate) fn validate_post_fields(
    title: Option<String>,
    content: Option<String>,
) -> Result<(String, String), ApiError> {
    let mut issues = Vec::new();

    let title = match title {
        Some(title) if !title.is_empty() => Some(title),
        Some(_) => {
            issues.push(ValidationIssue::too_short("title", 1));
            None
        }
        None => {
            issues.push(ValidationIssue::required("title"));
            None
        }
    };

    let content = match content {
        Some(content) if !content.is_empty() => Some(content),
        Some(_) => {
            issues.push(ValidationIssue::too_short("content", 1));
            None
        }
        None => {
            issues.push(ValidationIssue::required("content"));
            None
        }
    };

    match (title, content) {
        (Some(title), Some(content)) => Ok((title, content)),
        _ => Err(ApiError::Validation(issues)),
    }
}
