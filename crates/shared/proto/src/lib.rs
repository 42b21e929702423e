//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated service definitions for the SSO
//! Auth service (register, login, admin check).

/// Authentication service definitions.
pub mod auth {
    tonic::include_proto!("auth");
}

// Re-export commonly used items
pub use auth::auth_client::AuthClient;
pub use auth::auth_server::{Auth, AuthServer};
