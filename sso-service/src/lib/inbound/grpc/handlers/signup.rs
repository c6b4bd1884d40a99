use std::time::Duration;

use tonic::Status;

use super::with_deadline;
use crate::identity::ports::AuthServicePort;
use crate::inbound::grpc::validation::validate_signup;
use crate::proto::SignupRequest;
use crate::proto::SignupResponse;

pub async fn signup<S: AuthServicePort>(
    service: &S,
    request: SignupRequest,
    timeout: Duration,
) -> Result<SignupResponse, Status> {
    let command = validate_signup(request)?;

    let user_id = with_deadline(timeout, service.signup(command)).await?;

    Ok(SignupResponse {
        user_id: user_id.to_string(),
    })
}
