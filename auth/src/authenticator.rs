use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::HashCost;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password hashing and token issuance.
///
/// Stateless apart from the configured work factor, so a single instance can be
/// shared across tasks and threads.
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl Authenticator {
    /// Create a new authenticator with the default hashing cost.
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(),
        }
    }

    /// Create a new authenticator with an explicit hashing cost.
    ///
    /// # Errors
    /// * `InvalidCost` - Parameters are outside the ranges Argon2 accepts
    pub fn with_cost(cost: HashCost) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::with_cost(cost)?,
            token_issuer: TokenIssuer::new(),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Sign claims with an application secret.
    ///
    /// # Arguments
    /// * `claims` - JWT claims to encode
    /// * `secret` - Signing secret of the target application
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token<T: Serialize>(&self, claims: &T, secret: &[u8]) -> Result<String, JwtError> {
        self.token_issuer.issue(claims, secret)
    }
}
