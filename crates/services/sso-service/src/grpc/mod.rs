//! gRPC layer for the SSO service.

mod auth_grpc;

pub use auth_grpc::AuthGrpcService;
