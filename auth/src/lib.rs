//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id, fixed work factor)
//! - JWT session token generation and validation (HS256)
//! - Authentication coordination
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
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("user123", "alice", "user", Duration::hours(24));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
