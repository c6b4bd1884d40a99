use std::time::Duration;

use tonic::Status;

use super::with_deadline;
use crate::identity::ports::AuthServicePort;
use crate::inbound::grpc::validation::validate_is_admin;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: &S,
    request: IsAdminRequest,
    timeout: Duration,
) -> Result<IsAdminResponse, Status> {
    let user_id = validate_is_admin(request)?;

    let is_admin = with_deadline(timeout, service.is_admin(&user_id)).await?;

    Ok(IsAdminResponse { is_admin })
}
