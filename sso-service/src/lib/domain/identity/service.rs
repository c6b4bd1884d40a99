use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Duration;

use crate::identity::errors::AuthError;
use crate::identity::errors::RepositoryError;
use crate::identity::models::Application;
use crate::identity::models::SigninCommand;
use crate::identity::models::SignupCommand;
use crate::identity::models::User;
use crate::identity::models::UserId;
use crate::identity::ports::ApplicationRepository;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Holds only immutable state (token TTL) and shared handles, so one instance
/// serves every request without locking.
pub struct AuthService<UR, AR>
where
    UR: UserRepository,
    AR: ApplicationRepository,
{
    users: Arc<UR>,
    applications: Arc<AR>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<UR, AR> AuthService<UR, AR>
where
    UR: UserRepository,
    AR: ApplicationRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `applications` - Application lookup implementation
    /// * `authenticator` - Password hashing and token signing
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(
        users: Arc<UR>,
        applications: Arc<AR>,
        authenticator: Arc<Authenticator>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            applications,
            authenticator,
            token_ttl,
        }
    }

    /// Build and sign the token for a user signing in to an application.
    fn issue_token(&self, user: &User, application: &Application) -> Result<String, AuthError> {
        let claims = Claims::for_user(
            user.id,
            user.email.as_str(),
            application.id.value(),
            self.token_ttl,
        );

        self.authenticator
            .issue_token(&claims, &application.secret)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate token");
                AuthError::from(e)
            })
    }

    /// Run CPU-heavy Argon2 work on the blocking pool.
    async fn run_blocking<T, F>(&self, work: F) -> Result<T, AuthError>
    where
        F: FnOnce(&Authenticator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || work(&authenticator))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))
    }
}

#[async_trait]
impl<UR, AR> AuthServicePort for AuthService<UR, AR>
where
    UR: UserRepository,
    AR: ApplicationRepository,
{
    #[tracing::instrument(skip_all, fields(op = "auth.signup", email = %command.email))]
    async fn signup(&self, command: SignupCommand) -> Result<UserId, AuthError> {
        let password = command.password;
        let password_hash = self
            .run_blocking(move |authenticator| authenticator.hash_password(password.expose()))
            .await?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate password hash");
                AuthError::from(e)
            })?;

        let user_id = self
            .users
            .save_user(&command.email, password_hash.as_bytes())
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => {
                    tracing::warn!("User already exists");
                    AuthError::UserExists
                }
                other => {
                    tracing::error!(error = %other, "Failed to create user");
                    AuthError::Repository(other)
                }
            })?;

        tracing::info!(user_id = %user_id, "User registered");
        Ok(user_id)
    }

    #[tracing::instrument(
        skip_all,
        fields(op = "auth.signin", email = %command.email, app_id = %command.app_id)
    )]
    async fn signin(&self, command: SigninCommand) -> Result<String, AuthError> {
        let user = self
            .users
            .find_user_by_email(&command.email)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    tracing::warn!("User not found");
                    AuthError::InvalidCredentials
                }
                other => {
                    tracing::error!(error = %other, "Failed to get user");
                    AuthError::Repository(other)
                }
            })?;

        let stored_hash = String::from_utf8(user.password_hash.clone()).map_err(|_| {
            tracing::warn!(user_id = %user.id, "Stored password hash is not valid UTF-8");
            AuthError::InvalidCredentials
        })?;
        let password = command.password;
        let verified = self
            .run_blocking(move |authenticator| {
                authenticator.verify_password(password.expose(), &stored_hash)
            })
            .await?;

        match verified {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(user_id = %user.id, "Invalid credentials");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Invalid credentials");
                return Err(AuthError::InvalidCredentials);
            }
        }

        let application = self
            .applications
            .find_application(command.app_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    tracing::warn!("App not found");
                    AuthError::AppNotFound(command.app_id)
                }
                other => {
                    tracing::error!(error = %other, "Failed to get app");
                    AuthError::Repository(other)
                }
            })?;

        let token = self.issue_token(&user, &application)?;

        tracing::info!(user_id = %user.id, "User signed in");
        Ok(token)
    }

    #[tracing::instrument(skip_all, fields(op = "auth.is_admin", user_id = %user_id))]
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, AuthError> {
        let is_admin = self
            .users
            .find_admin_flag(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    tracing::warn!("User not found");
                    AuthError::SubjectNotFound(*user_id)
                }
                other => {
                    tracing::error!(error = %other, "Failed to get admin flag");
                    AuthError::Repository(other)
                }
            })?;

        tracing::info!(is_admin, "Checked if user is admin");
        Ok(is_admin)
    }
}

#[cfg(test)]
mod tests {
    use auth::HashCost;
    use chrono::Utc;
    use jsonwebtoken::DecodingKey;
    use jsonwebtoken::Validation;
    use mockall::mock;

    use super::*;
    use crate::identity::errors::ErrorKind;
    use crate::identity::models::AppId;
    use crate::identity::models::EmailAddress;
    use crate::identity::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn save_user(&self, email: &EmailAddress, password_hash: &[u8]) -> Result<UserId, RepositoryError>;
            async fn find_user_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError>;
            async fn find_admin_flag(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub TestApplicationRepository {}

        #[async_trait]
        impl ApplicationRepository for TestApplicationRepository {
            async fn find_application(&self, app_id: AppId) -> Result<Application, RepositoryError>;
        }
    }

    const APP_SECRET: &[u8] = b"test-secret";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(
            Authenticator::with_cost(HashCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        )
    }

    fn service(
        users: MockTestUserRepository,
        applications: MockTestApplicationRepository,
    ) -> AuthService<MockTestUserRepository, MockTestApplicationRepository> {
        AuthService::new(
            Arc::new(users),
            Arc::new(applications),
            authenticator(),
            Duration::hours(1),
        )
    }

    fn stored_user(password: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new("a@b.com".to_string()).unwrap(),
            password_hash: authenticator()
                .hash_password(password)
                .unwrap()
                .into_bytes(),
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    fn application(id: i32) -> Application {
        Application {
            id: AppId::new(id).unwrap(),
            name: "test".to_string(),
            secret: APP_SECRET.to_vec(),
        }
    }

    fn signin_command(password: &str) -> SigninCommand {
        SigninCommand::new(
            EmailAddress::new("a@b.com".to_string()).unwrap(),
            Password::new(password.to_string()).unwrap(),
            AppId::new(1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_signup_success() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        let user_id = UserId::new();
        users
            .expect_save_user()
            .withf(|email, hash| {
                email.as_str() == "a@b.com"
                    && hash.starts_with(b"$argon2id$")
                    && !String::from_utf8_lossy(hash).contains("Aa1!aaaa")
            })
            .times(1)
            .returning(move |_, _| Ok(user_id));

        let service = service(users, applications);
        let command = SignupCommand::new(
            EmailAddress::new("a@b.com".to_string()).unwrap(),
            Password::new("Aa1!aaaa".to_string()).unwrap(),
        );

        let result = service.signup(command).await;
        assert_eq!(result.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users
            .expect_save_user()
            .times(1)
            .returning(|_, _| Err(RepositoryError::AlreadyExists));

        let service = service(users, applications);
        let command = SignupCommand::new(
            EmailAddress::new("a@b.com".to_string()).unwrap(),
            Password::new("Aa1!aaaa".to_string()).unwrap(),
        );

        let err = service.signup(command).await.unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[tokio::test]
    async fn test_signup_storage_failure_is_internal() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users
            .expect_save_user()
            .times(1)
            .returning(|_, _| Err(RepositoryError::Database("connection reset".to_string())));

        let service = service(users, applications);
        let command = SignupCommand::new(
            EmailAddress::new("a@b.com".to_string()).unwrap(),
            Password::new("Aa1!aaaa".to_string()).unwrap(),
        );

        let err = service.signup(command).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_signin_success() {
        let mut users = MockTestUserRepository::new();
        let mut applications = MockTestApplicationRepository::new();

        let user = stored_user("Aa1!aaaa");
        let user_id = user.id;
        users
            .expect_find_user_by_email()
            .withf(|email| email.as_str() == "a@b.com")
            .times(1)
            .returning(move |_| Ok(user.clone()));
        applications
            .expect_find_application()
            .withf(|app_id| app_id.value() == 1)
            .times(1)
            .returning(|_| Ok(application(1)));

        let service = service(users, applications);
        let token = service
            .signin(signin_command("Aa1!aaaa"))
            .await
            .expect("Signin failed");

        let claims = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(APP_SECRET),
            &Validation::default(),
        )
        .expect("Token validation failed")
        .claims;
        assert_eq!(claims.uid, user_id.to_string());
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.app_id, 1);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[tokio::test]
    async fn test_signin_wrong_password() {
        let mut users = MockTestUserRepository::new();
        let mut applications = MockTestApplicationRepository::new();

        let user = stored_user("Aa1!aaaa");
        users
            .expect_find_user_by_email()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        applications.expect_find_application().times(0);

        let service = service(users, applications);
        let err = service
            .signin(signin_command("wrong!Pass1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signin_unknown_email_matches_wrong_password() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();
        users
            .expect_find_user_by_email()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));
        let unknown = service(users, applications)
            .signin(signin_command("Aa1!aaaa"))
            .await
            .unwrap_err();

        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();
        let user = stored_user("Aa1!aaaa");
        users
            .expect_find_user_by_email()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        let mismatch = service(users, applications)
            .signin(signin_command("wrong!Pass1"))
            .await
            .unwrap_err();

        assert_eq!(unknown.kind(), mismatch.kind());
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[tokio::test]
    async fn test_signin_malformed_hash_is_invalid_credentials() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users.expect_find_user_by_email().times(1).returning(|_| {
            Ok(User {
                id: UserId::new(),
                email: EmailAddress::new("a@b.com".to_string()).unwrap(),
                password_hash: b"corrupted".to_vec(),
                created_at: Utc::now(),
                is_admin: false,
            })
        });

        let err = service(users, applications)
            .signin(signin_command("Aa1!aaaa"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signin_unknown_app() {
        let mut users = MockTestUserRepository::new();
        let mut applications = MockTestApplicationRepository::new();

        let user = stored_user("Aa1!aaaa");
        users
            .expect_find_user_by_email()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        applications
            .expect_find_application()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let err = service(users, applications)
            .signin(signin_command("Aa1!aaaa"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::AppNotFound(id) if id.value() == 1));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_signin_user_lookup_failure_is_internal() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users
            .expect_find_user_by_email()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("timeout".to_string())));

        let err = service(users, applications)
            .signin(signin_command("Aa1!aaaa"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_signin_app_lookup_failure_is_internal() {
        let mut users = MockTestUserRepository::new();
        let mut applications = MockTestApplicationRepository::new();

        let user = stored_user("Aa1!aaaa");
        users
            .expect_find_user_by_email()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        applications
            .expect_find_application()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("connection refused".to_string())));

        let err = service(users, applications)
            .signin(signin_command("Aa1!aaaa"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Repository(RepositoryError::Database(_))
        ));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_is_admin_lookup_failure_is_internal() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users
            .expect_find_admin_flag()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("connection refused".to_string())));

        let err = service(users, applications)
            .is_admin(&UserId::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Repository(RepositoryError::Database(_))
        ));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_is_admin() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        let user_id = UserId::new();
        users
            .expect_find_admin_flag()
            .withf(move |id| *id == user_id)
            .times(2)
            .returning(|_| Ok(true));

        let service = service(users, applications);
        assert!(service.is_admin(&user_id).await.unwrap());
        assert!(service.is_admin(&user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_unknown_subject() {
        let mut users = MockTestUserRepository::new();
        let applications = MockTestApplicationRepository::new();

        users
            .expect_find_admin_flag()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let user_id = UserId::new();
        let err = service(users, applications)
            .is_admin(&user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::SubjectNotFound(id) if id == user_id));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
