use std::sync::Arc;

use argon2::Params;
use auth::Authenticator;
use auth::PasswordHasher;
use blog_service::domain::auth::service::AuthService;
use blog_service::domain::session::policy::SessionPolicy;
use blog_service::domain::user::policy::CredentialPolicy;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::InMemoryPostStore;
use blog_service::outbound::repositories::InMemorySessionStore;
use blog_service::outbound::repositories::InMemoryUserStore;
use serde_json::json;

/// Test application that spawns a real server
///
/// Runs against the in-memory backend with minimal hash cost so each
/// test gets an isolated, fast instance.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl_hours(24).await
    }

    /// Spawn with a custom session TTL in hours.
    ///
    /// A TTL of 0 makes every session expired as soon as it is issued,
    /// which is how the expiry scenarios drive the API.
    pub async fn spawn_with_ttl_hours(ttl_hours: i64) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("No local address").port();
        let address = format!("http://127.0.0.1:{}", port);

        let hasher = PasswordHasher::with_memory_cost(Params::MIN_M_COST)
            .expect("Failed to build test hasher");
        let authenticator =
            Arc::new(Authenticator::new(hasher).expect("Failed to build authenticator"));

        let credential_policy = CredentialPolicy::new(
            3,
            8,
            vec![
                "admin".to_string(),
                "root".to_string(),
                "superuser".to_string(),
            ],
        );
        let session_policy = SessionPolicy::from_hours(ttl_hours);

        let users = Arc::new(InMemoryUserStore::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let posts = Arc::new(InMemoryPostStore::new());

        let auth_service = Arc::new(AuthService::new(
            users,
            sessions,
            authenticator,
            credential_policy,
            session_policy,
        ));

        let router = create_router(auth_service, posts);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with a session token
    ///
    /// Sends the raw token value the way the clients do; no Bearer
    /// prefix.
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", token)
    }

    /// Helper to make POST request with a session token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header("Authorization", token)
    }

    /// Helper to make PUT request with a session token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).header("Authorization", token)
    }

    /// Helper to make DELETE request with a session token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).header("Authorization", token)
    }

    /// Register an account and return its session token and user ID.
    pub async fn register(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .post("/users")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let token = body["token"]
            .as_str()
            .expect("Missing token in response")
            .to_string();
        let user_id = body["userId"]
            .as_str()
            .expect("Missing userId in response")
            .to_string();

        (token, user_id)
    }
}
