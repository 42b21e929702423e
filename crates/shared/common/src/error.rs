//! Unified error handling for the gRPC surface.
//!
//! Provides a single application error type that the domain service and
//! storage implementations return, plus its mapping to tonic status codes
//! at the transport boundary.

use domain::DomainError;
use thiserror::Error;
use tonic::Status;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("invalid credentials")]
    InvalidCredentials,

    // Registration
    #[error("user already exists")]
    UserAlreadyExists,

    // Privilege/application lookup
    #[error("invalid app id")]
    InvalidAppId,

    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    // Input validation
    #[error("invalid input: {0}")]
    Validation(String),

    // Token signing
    #[error("token signing error: {0}")]
    Signing(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and clients
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AppError::InvalidAppId => "INVALID_APP_ID",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Signing(_) => "SIGNING_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(entity) => format!("{} not found", entity),

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                "internal error".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("token error: {:?}", e);
                "internal error".to_string()
            }
            AppError::Signing(msg) => {
                tracing::error!("token signing error: {}", msg);
                "internal error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                "internal error".to_string()
            }

            // Use default message for the rest
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::InvalidCredentials => tonic::Code::Unauthenticated,
            AppError::UserAlreadyExists => tonic::Code::AlreadyExists,
            AppError::InvalidAppId | AppError::NotFound(_) => tonic::Code::NotFound,
            AppError::Validation(_) => tonic::Code::InvalidArgument,
            _ => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::UserAlreadyExists => AppError::UserAlreadyExists,
            DomainError::InvalidAppId => AppError::InvalidAppId,
            DomainError::Password(msg) => AppError::Internal(msg),
            DomainError::Signing(msg) => AppError::Signing(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        AppError::Signing(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
