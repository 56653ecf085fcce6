use std::sync::Arc;
use std::time::Duration;

use blog_service::config::Config;
use blog_service::config::StorageBackend;
use blog_service::domain::auth::ports::AuthServicePort;
use blog_service::domain::auth::service::AuthService;
use blog_service::domain::post::ports::PostStore;
use blog_service::domain::session::cleanup::SessionCleanup;
use blog_service::domain::session::policy::SessionPolicy;
use blog_service::domain::session::ports::SessionStore;
use blog_service::domain::user::policy::CredentialPolicy;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::InMemoryPostStore;
use blog_service::outbound::repositories::InMemorySessionStore;
use blog_service::outbound::repositories::InMemoryUserStore;
use blog_service::outbound::repositories::PostgresPostStore;
use blog_service::outbound::repositories::PostgresSessionStore;
use blog_service::outbound::repositories::PostgresUserStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        backend = ?config.storage.backend,
        session_ttl_hours = config.session.ttl_hours,
        cleanup_interval_secs = config.session.cleanup_interval_secs,
        "Configuration loaded"
    );

    let hasher = auth::PasswordHasher::with_memory_cost(config.policy.hash_memory_cost)?;
    let authenticator = Arc::new(auth::Authenticator::new(hasher)?);

    let credential_policy = CredentialPolicy::new(
        config.policy.username_min_chars,
        config.policy.password_min_chars,
        config.policy.reserved_usernames.clone(),
    );
    let session_policy = SessionPolicy::from_hours(config.session.ttl_hours);

    let (auth_service, session_store, post_store): (
        Arc<dyn AuthServicePort>,
        Arc<dyn SessionStore>,
        Arc<dyn PostStore>,
    ) = match config.storage.backend {
        StorageBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = 5,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let users = Arc::new(PostgresUserStore::new(pg_pool.clone()));
            let sessions = Arc::new(PostgresSessionStore::new(pg_pool.clone()));
            let posts = Arc::new(PostgresPostStore::new(pg_pool));

            let auth_service = Arc::new(AuthService::new(
                users,
                Arc::clone(&sessions),
                authenticator,
                credential_policy,
                session_policy.clone(),
            ));

            (auth_service, sessions, posts)
        }
        StorageBackend::Memory => {
            tracing::info!(database = "memory", "Using in-process storage");

            let users = Arc::new(InMemoryUserStore::new());
            let sessions = Arc::new(InMemorySessionStore::new());
            let posts = Arc::new(InMemoryPostStore::new());

            let auth_service = Arc::new(AuthService::new(
                users,
                Arc::clone(&sessions),
                authenticator,
                credential_policy,
                session_policy.clone(),
            ));

            (auth_service, sessions, posts)
        }
    };

    let cleanup = SessionCleanup::new(session_store, session_policy);
    let cleanup_interval = Duration::from_secs(config.session.cleanup_interval_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            if let Err(e) = cleanup.run().await {
                tracing::error!(error = %e, "Session sweep failed");
            }
        }
    });

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, post_store);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
