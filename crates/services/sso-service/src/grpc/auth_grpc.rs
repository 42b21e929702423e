//! gRPC transport adapter for the auth domain service.
//!
//! Owns request validation: malformed input is rejected here with
//! `InvalidArgument` and never reaches the domain service. Domain errors
//! cross the boundary through the `AppError -> Status` mapping.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::AuthService;
use proto::auth::{
    auth_server::Auth as AuthProto, IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse,
};

/// gRPC service wrapper for AuthService.
pub struct AuthGrpcService {
    service: Arc<dyn AuthService>,
}

impl AuthGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AuthProto for AuthGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();

        if req.email.is_empty() {
            return Err(Status::invalid_argument("email is empty"));
        }
        if req.password.is_empty() {
            return Err(Status::invalid_argument("password is empty"));
        }

        let user_id = self
            .service
            .register_new_user(&req.email, &req.password)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(RegisterResponse { user_id }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();

        if req.email.is_empty() {
            return Err(Status::invalid_argument("email is empty"));
        }
        if req.password.is_empty() {
            return Err(Status::invalid_argument("password is empty"));
        }
        if req.app_id == 0 {
            return Err(Status::invalid_argument("app_id is empty"));
        }

        let token = self
            .service
            .login(&req.email, &req.password, req.app_id)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(LoginResponse { token }))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let req = request.into_inner();

        if req.user_id == 0 {
            return Err(Status::invalid_argument("user_id is empty"));
        }

        let is_admin = self
            .service
            .is_admin(req.user_id)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(IsAdminResponse { is_admin }))
    }
}
