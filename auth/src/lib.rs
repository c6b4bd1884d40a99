//! Authentication utilities library
//!
//! Provides the credential primitives used by the SSO service:
//! - Password hashing (Argon2id, configurable work factor)
//! - JWT issuance signed with a per-application secret
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Aa1!aaaa").unwrap();
//! let is_valid = hasher.verify("Aa1!aaaa", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::{Claims, TokenIssuer};
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new();
//! let claims = Claims::for_user("user123", "a@b.com", 1, Duration::hours(1));
//! let token = issuer.issue(&claims, b"secret-of-app-1").unwrap();
//! assert!(!token.is_empty());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
