use thiserror::Error;

use crate::identity::models::AppId;
use crate::identity::models::UserId;

/// Classification shared by every error the service can surface.
///
/// The gRPC boundary branches on this, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally malformed request, rejected before any storage or hashing work
    InvalidInput,
    /// Unknown email or wrong password, deliberately indistinguishable
    InvalidCredentials,
    /// Email already registered
    AlreadyExists,
    /// Referenced application or subject does not exist
    NotFound,
    /// Storage, hashing or signing failure
    Internal,
}

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User ID is empty")]
    Empty,

    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email domain must contain a dot")]
    MissingDomainDot,
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain a special character")]
    MissingSymbol,
}

/// Error for AppId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppIdError {
    #[error("app_id is required")]
    Missing,
}

/// Structural request validation failure, naming the offending field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("invalid app_id: {0}")]
    AppId(#[from] AppIdError),

    #[error("invalid user_id: {0}")]
    UserId(#[from] UserIdError),
}

impl ValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Email(_) => "email",
            ValidationError::Password(_) => "password",
            ValidationError::AppId(_) => "app_id",
            ValidationError::UserId(_) => "user_id",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Error reported by storage adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("App not found: {0}")]
    AppNotFound(AppId),

    #[error("User not found: {0}")]
    SubjectNotFound(UserId),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Storage error: {0}")]
    Repository(#[source] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::UserExists => ErrorKind::AlreadyExists,
            AuthError::AppNotFound(_) | AuthError::SubjectNotFound(_) => ErrorKind::NotFound,
            AuthError::Password(_)
            | AuthError::Token(_)
            | AuthError::Repository(_)
            | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }
}
