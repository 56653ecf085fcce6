use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::delete_post::delete_post;
use super::handlers::get_post::get_post;
use super::handlers::list_posts::list_posts;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::update_post::update_post;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::post::ports::PostStore;

/// Unified application state for HTTP handlers.
///
/// Holds trait objects so the binary can pick the storage backend at
/// startup without the router caring which one it got.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub post_store: Arc<dyn PostStore>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    post_store: Arc<dyn PostStore>,
) -> Router {
    let state = AppState {
        auth_service,
        post_store,
    };

    // Logout stays public: it reads the Authorization header itself so
    // an expired session reports "Session expired" rather than the
    // middleware's plain 401.
    let public_routes = Router::new()
        .route("/users", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/posts", post(create_post))
        .route("/posts", get(list_posts))
        .route("/posts/:post_id", get(get_post))
        .route("/posts/:post_id", put(update_post))
        .route("/posts/:post_id", delete(delete_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
