pub mod memory;
pub mod post;
pub mod session;
pub mod user;

pub use memory::InMemoryPostStore;
pub use memory::InMemorySessionStore;
pub use memory::InMemoryUserStore;
pub use post::PostgresPostStore;
pub use session::PostgresSessionStore;
pub use user::PostgresUserStore;
