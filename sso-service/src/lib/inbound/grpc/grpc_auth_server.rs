use std::sync::Arc;
use std::time::Duration;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::is_admin;
use super::handlers::signin;
use super::handlers::signup;
use crate::identity::ports::AuthServicePort;
use crate::proto::auth_server::Auth as AuthProto;
use crate::proto::auth_server::AuthServer;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;
use crate::proto::SigninRequest;
use crate::proto::SigninResponse;
use crate::proto::SignupRequest;
use crate::proto::SignupResponse;

/// gRPC adapter for the auth service.
pub struct AuthGrpcService<S: AuthServicePort> {
    service: Arc<S>,
    request_timeout: Duration,
}

impl<S: AuthServicePort> AuthGrpcService<S> {
    /// # Arguments
    /// * `service` - Auth service implementation
    /// * `request_timeout` - Upper bound on each service call
    pub fn new(service: Arc<S>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    /// Wrap into the tonic server type for `Server::add_service`.
    pub fn into_server(self) -> AuthServer<Self> {
        AuthServer::new(self)
    }
}

#[tonic::async_trait]
impl<S: AuthServicePort> AuthProto for AuthGrpcService<S> {
    async fn signup(
        &self,
        request: Request<SignupRequest>,
    ) -> Result<Response<SignupResponse>, Status> {
        let response =
            signup::signup(self.service.as_ref(), request.into_inner(), self.request_timeout)
                .await?;
        Ok(Response::new(response))
    }

    async fn signin(
        &self,
        request: Request<SigninRequest>,
    ) -> Result<Response<SigninResponse>, Status> {
        let response =
            signin::signin(self.service.as_ref(), request.into_inner(), self.request_timeout)
                .await?;
        Ok(Response::new(response))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let response =
            is_admin::is_admin(self.service.as_ref(), request.into_inner(), self.request_timeout)
                .await?;
        Ok(Response::new(response))
    }
}
