use async_trait::async_trait;

use crate::identity::errors::AuthError;
use crate::identity::errors::RepositoryError;
use crate::identity::models::AppId;
use crate::identity::models::Application;
use crate::identity::models::EmailAddress;
use crate::identity::models::SigninCommand;
use crate::identity::models::SignupCommand;
use crate::identity::models::User;
use crate::identity::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email and password
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `Repository` - Storage failed
    async fn signup(&self, command: SignupCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue a token scoped to an application.
    ///
    /// # Arguments
    /// * `command` - Validated email, password and application identifier
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - Application does not exist
    /// * `Token` - Signing failed
    /// * `Repository` - Storage failed
    async fn signin(&self, command: SigninCommand) -> Result<String, AuthError>;

    /// Check whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `SubjectNotFound` - User does not exist
    /// * `Repository` - Storage failed
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, AuthError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user with a freshly assigned identifier.
    ///
    /// Must be atomic: either the full record is stored or nothing is.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `Database` - Storage failed
    async fn save_user(
        &self,
        email: &EmailAddress,
        password_hash: &[u8],
    ) -> Result<UserId, RepositoryError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Database` - Storage failed
    async fn find_user_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError>;

    /// Retrieve the admin flag of a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Database` - Storage failed
    async fn find_admin_flag(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
}

/// Read access to provisioned client applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    /// Retrieve an application with its signing secret.
    ///
    /// # Errors
    /// * `NotFound` - Application does not exist
    /// * `Database` - Storage failed
    async fn find_application(&self, app_id: AppId) -> Result<Application, RepositoryError>;
}
