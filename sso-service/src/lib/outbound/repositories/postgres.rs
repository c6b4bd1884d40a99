use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::identity::errors::RepositoryError;
use crate::identity::models::AppId;
use crate::identity::models::Application;
use crate::identity::models::EmailAddress;
use crate::identity::models::User;
use crate::identity::models::UserId;
use crate::identity::ports::ApplicationRepository;
use crate::identity::ports::UserRepository;

/// PostgreSQL storage for users and applications.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: Vec<u8>,
    created_at: DateTime<Utc>,
    is_admin: bool,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(row.email)
            .map_err(|e| RepositoryError::Database(format!("Stored email is invalid: {}", e)))?;

        Ok(User {
            id: UserId(row.id),
            email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            is_admin: row.is_admin,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    id: i32,
    name: String,
    secret: Vec<u8>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = RepositoryError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        let id = AppId::new(row.id)
            .map_err(|e| RepositoryError::Database(format!("Stored app id is invalid: {}", e)))?;

        Ok(Application {
            id,
            name: row.name,
            secret: row.secret,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresRepository {
    async fn save_user(
        &self,
        email: &EmailAddress,
        password_hash: &[u8],
    ) -> Result<UserId, RepositoryError> {
        let id = UserId::new();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, is_admin)
            VALUES ($1, $2, $3, $4, FALSE)
            "#,
        )
        .bind(id.0)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::AlreadyExists;
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        Ok(id)
    }

    async fn find_user_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some(r) => User::try_from(r),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn find_admin_flag(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ApplicationRepository for PostgresRepository {
    async fn find_application(&self, app_id: AppId) -> Result<Application, RepositoryError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some(r) => Application::try_from(r),
            None => Err(RepositoryError::NotFound),
        }
    }
}
