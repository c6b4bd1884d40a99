use std::time::Duration;

use tonic::Status;

use super::with_deadline;
use crate::identity::ports::AuthServicePort;
use crate::inbound::grpc::validation::validate_signin;
use crate::proto::SigninRequest;
use crate::proto::SigninResponse;

pub async fn signin<S: AuthServicePort>(
    service: &S,
    request: SigninRequest,
    timeout: Duration,
) -> Result<SigninResponse, Status> {
    let command = validate_signin(request)?;

    let token = with_deadline(timeout, service.signin(command)).await?;

    Ok(SigninResponse { token })
}
