//! Structural checks on raw requests.
//!
//! Runs before the auth service is called; a failure here never touches storage
//! or the password hasher.

use crate::identity::errors::ValidationError;
use crate::identity::models::AppId;
use crate::identity::models::EmailAddress;
use crate::identity::models::Password;
use crate::identity::models::SigninCommand;
use crate::identity::models::SignupCommand;
use crate::identity::models::UserId;
use crate::proto::IsAdminRequest;
use crate::proto::SigninRequest;
use crate::proto::SignupRequest;

pub fn validate_signup(request: SignupRequest) -> Result<SignupCommand, ValidationError> {
    let email = EmailAddress::new(request.email)?;
    let password = Password::new(request.password)?;
    Ok(SignupCommand::new(email, password))
}

pub fn validate_signin(request: SigninRequest) -> Result<SigninCommand, ValidationError> {
    let email = EmailAddress::new(request.email)?;
    let password = Password::new(request.password)?;
    let app_id = AppId::new(request.app_id)?;
    Ok(SigninCommand::new(email, password, app_id))
}

pub fn validate_is_admin(request: IsAdminRequest) -> Result<UserId, ValidationError> {
    Ok(UserId::from_string(&request.user_id)?)
}
