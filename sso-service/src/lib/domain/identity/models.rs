use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::AppIdError;
use crate::identity::errors::EmailError;
use crate::identity::errors::PasswordPolicyError;
use crate::identity::errors::UserIdError;

/// Registered user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    /// Argon2 PHC string bytes, never the raw password
    pub password_hash: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub is_admin: bool,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `Empty` - String is empty
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }

        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// RFC 5322 syntax, and the domain must contain a dot (`local@domain.tld`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `MissingDomainDot` - Domain has no dot between labels
    pub fn new(email: String) -> Result<Self, EmailError> {
        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        let domain = parsed.domain();
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::MissingDomainDot);
        }

        Ok(EmailAddress(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw password that satisfies the password policy.
///
/// Debug output is redacted so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Create a new password, enforcing length and character classes.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingLowercase` / `MissingUppercase` / `MissingDigit` / `MissingSymbol`
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !password.chars().any(|c| c.is_ascii_punctuation()) {
            return Err(PasswordPolicyError::MissingSymbol);
        }

        Ok(Self(password))
    }

    /// Get the raw password.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Application identifier, provisioned outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(i32);

impl AppId {
    /// # Errors
    /// * `Missing` - Identifier is zero (unset on the wire)
    pub fn new(id: i32) -> Result<Self, AppIdError> {
        if id == 0 {
            return Err(AppIdError::Missing);
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client application holding its own token signing secret.
#[derive(Clone)]
pub struct Application {
    pub id: AppId,
    pub name: String,
    pub secret: Vec<u8>,
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Command to register a new user
#[derive(Debug)]
pub struct SignupCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl SignupCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Command to exchange credentials for an application-scoped token
#[derive(Debug)]
pub struct SigninCommand {
    pub email: EmailAddress,
    pub password: Password,
    pub app_id: AppId,
}

impl SigninCommand {
    pub fn new(email: EmailAddress, password: Password, app_id: AppId) -> Self {
        Self {
            email,
            password,
            app_id,
        }
    }
}
