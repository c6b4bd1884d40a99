use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token issuer.
///
/// Holds no key material: every application signs with its own secret, which is
/// passed in per call. Uses HS256 (HMAC with SHA-256).
///
/// Issuance only. Tokens are validated by the resource servers that receive them.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new HS256 token issuer.
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a compact JWT.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    /// * `secret` - Signing secret of the application named in the claims
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue<T: Serialize>(&self, claims: &T, secret: &[u8]) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &EncodingKey::from_secret(secret))
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}
