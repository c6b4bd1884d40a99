use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Identifies the user and scopes the token to the application it was issued for.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub uid: String,

    /// User email at the time of issuance
    pub email: String,

    /// Application the token is scoped to
    pub app_id: i32,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user signing in to an application, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email address
    /// * `app_id` - Application identifier
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with `exp - iat` equal to `ttl` in seconds
    pub fn for_user(
        user_id: impl ToString,
        email: impl ToString,
        app_id: i32,
        ttl: Duration,
    ) -> Self {
        Self::issued_at(Utc::now(), user_id, email, app_id, ttl)
    }

    /// Create claims with an explicit issuance instant.
    pub fn issued_at(
        now: DateTime<Utc>,
        user_id: impl ToString,
        email: impl ToString,
        app_id: i32,
        ttl: Duration,
    ) -> Self {
        let expiration = now + ttl;

        Self {
            uid: user_id.to_string(),
            email: email.to_string(),
            app_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
