pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::auth::service::AuthService;
pub use domain::post::models::Post;
pub use domain::post::models::PostId;
pub use domain::session::cleanup::SessionCleanup;
pub use domain::session::models::Session;
pub use domain::session::models::SessionId;
pub use domain::session::policy::SessionPolicy;
pub use domain::user::models::User;
pub use domain::user::models::UserId;
pub use domain::user::policy::CredentialPolicy;
pub use outbound::repositories;
