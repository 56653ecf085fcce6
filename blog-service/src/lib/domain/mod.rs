pub mod auth;
pub mod post;
pub mod session;
pub mod user;
