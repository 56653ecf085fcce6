//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id, tunable cost)
//! - Opaque session token generation
//! - Credential verification coordination
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenGenerator;
//!
//! let generator = TokenGenerator::new();
//! let token = generator.generate();
//! assert_eq!(token.as_str().len(), 64);
//! ```
//!
//! ## Complete Credential Flow
//! ```
//! use auth::Authenticator;
//! use auth::PasswordHasher;
//!
//! let auth = Authenticator::new(PasswordHasher::new()).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify credentials
//! let is_valid = auth.verify_credentials("password123", Some(&hash)).unwrap();
//! assert!(is_valid);
//!
//! // Unknown accounts verify as false, never as an error
//! assert!(!auth.verify_credentials("password123", None).unwrap());
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionToken;
pub use token::TokenGenerator;
