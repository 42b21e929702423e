//! gRPC adapter tests: request validation and status-code mapping.
//!
//! Drives the tonic service implementation directly, backed by the
//! in-memory storage.

use std::sync::Arc;

use chrono::Duration;
use tonic::{Code, Request};

use domain::{App, HashParams, Hasher};
use proto::auth::auth_server::Auth;
use proto::auth::{IsAdminRequest, LoginRequest, RegisterRequest};
use sso_service_lib::grpc::AuthGrpcService;
use sso_service_lib::service::Authenticator;
use sso_service_lib::storage::MemoryStorage;
use sso_service_lib::token::TokenIssuer;

const APP_ID: i32 = 1;
const APP_SECRET: &str = "test-secret";

fn grpc_service() -> AuthGrpcService {
    let storage = Arc::new(MemoryStorage::new());
    storage.add_app(App::new(APP_ID, "test-app".to_string(), APP_SECRET.to_string()));

    // Low cost to keep the suite fast
    let hasher = Hasher::new(HashParams {
        m_cost_kib: 1024,
        t_cost: 1,
        p_cost: 1,
    })
    .unwrap();

    let service = Authenticator::new(
        storage.clone(),
        storage.clone(),
        storage,
        hasher,
        TokenIssuer::new(Duration::hours(1)),
    );

    AuthGrpcService::new(Arc::new(service))
}

fn register_request(email: &str, password: &str) -> Request<RegisterRequest> {
    Request::new(RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn login_request(email: &str, password: &str, app_id: i32) -> Request<LoginRequest> {
    Request::new(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        app_id,
    })
}

#[tokio::test]
async fn test_register_and_login_over_grpc() {
    let service = grpc_service();

    let registered = service
        .register(register_request("a@x.com", "Secret123!"))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(registered.user_id, 1);

    let logged_in = service
        .login(login_request("a@x.com", "Secret123!", APP_ID))
        .await
        .unwrap()
        .into_inner();
    assert!(!logged_in.token.is_empty());
}

#[tokio::test]
async fn test_register_validation() {
    let service = grpc_service();

    let no_email = service
        .register(register_request("", "Secret123!"))
        .await
        .unwrap_err();
    assert_eq!(no_email.code(), Code::InvalidArgument);

    let no_password = service
        .register(register_request("a@x.com", ""))
        .await
        .unwrap_err();
    assert_eq!(no_password.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_login_validation() {
    let service = grpc_service();

    let no_email = service
        .login(login_request("", "Secret123!", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(no_email.code(), Code::InvalidArgument);

    let no_password = service
        .login(login_request("a@x.com", "", APP_ID))
        .await
        .unwrap_err();
    assert_eq!(no_password.code(), Code::InvalidArgument);

    let no_app = service
        .login(login_request("a@x.com", "Secret123!", 0))
        .await
        .unwrap_err();
    assert_eq!(no_app.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_login_failure_status_does_not_enumerate() {
    let service = grpc_service();

    service
        .register(register_request("a@x.com", "Secret123!"))
        .await
        .unwrap();

    let wrong_password = service
        .login(login_request("a@x.com", "NotTheOne1!", APP_ID))
        .await
        .unwrap_err();
    let unknown_email = service
        .login(login_request("unknown@x.com", "anything", APP_ID))
        .await
        .unwrap_err();

    assert_eq!(wrong_password.code(), Code::Unauthenticated);
    assert_eq!(unknown_email.code(), Code::Unauthenticated);
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[tokio::test]
async fn test_duplicate_register_conflict_status() {
    let service = grpc_service();

    service
        .register(register_request("a@x.com", "Secret123!"))
        .await
        .unwrap();

    let duplicate = service
        .register(register_request("a@x.com", "Other456!"))
        .await
        .unwrap_err();
    assert_eq!(duplicate.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn test_is_admin_over_grpc() {
    let service = grpc_service();

    let registered = service
        .register(register_request("a@x.com", "Secret123!"))
        .await
        .unwrap()
        .into_inner();

    let response = service
        .is_admin(Request::new(IsAdminRequest {
            user_id: registered.user_id,
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(!response.is_admin);

    let zero_id = service
        .is_admin(Request::new(IsAdminRequest { user_id: 0 }))
        .await
        .unwrap_err();
    assert_eq!(zero_id.code(), Code::InvalidArgument);

    // Unknown user id surfaces through the current InvalidAppId mapping
    let unknown = service
        .is_admin(Request::new(IsAdminRequest { user_id: 999_999 }))
        .await
        .unwrap_err();
    assert_eq!(unknown.code(), Code::NotFound);
}
