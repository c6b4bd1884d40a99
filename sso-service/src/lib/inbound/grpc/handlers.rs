use std::future::Future;
use std::time::Duration;

use tonic::Status;

use crate::identity::errors::AuthError;
use crate::identity::errors::ErrorKind;
use crate::identity::errors::ValidationError;

pub mod is_admin;
pub mod signin;
pub mod signup;

/// Render an error kind as a status. `detail` reaches the client only for invalid input and not found.
fn status_for(kind: ErrorKind, detail: String) -> Status {
    match kind {
        ErrorKind::InvalidInput => Status::invalid_argument(detail),
        ErrorKind::InvalidCredentials => Status::invalid_argument("incorrect email or password"),
        ErrorKind::AlreadyExists => Status::already_exists("user already exists"),
        ErrorKind::NotFound => Status::not_found(detail),
        ErrorKind::Internal => {
            tracing::error!(error = %detail, "Request failed with internal error");
            Status::internal("internal error")
        }
    }
}

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        status_for(err.kind(), err.to_string())
    }
}

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        let detail = match &err {
            AuthError::AppNotFound(_) => "app not found".to_string(),
            AuthError::SubjectNotFound(_) => "user not found".to_string(),
            other => other.to_string(),
        };
        status_for(err.kind(), detail)
    }
}

/// Run a service call under the request deadline.
///
/// On expiry the service future is dropped, which cancels the in-flight storage call.
pub async fn with_deadline<T, F>(timeout: Duration, call: F) -> Result<T, Status>
where
    F: Future<Output = Result<T, AuthError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(Status::from),
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Request deadline exceeded");
            Err(Status::deadline_exceeded("deadline exceeded"))
        }
    }
}
