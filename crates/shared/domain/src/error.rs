//! Domain-level errors.
//!
//! The transport-independent error taxonomy of the SSO service. Callers
//! match on the kind, never on message text.

use thiserror::Error;

/// Domain error taxonomy.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Wrong email/password combination. Email-not-found and
    /// password-mismatch are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Duplicate registration by email
    #[error("user already exists")]
    UserAlreadyExists,

    /// Application or privilege lookup could not resolve
    #[error("invalid app id")]
    InvalidAppId,

    /// Password hashing failure (misconfigured cost, malformed input)
    #[error("password error: {0}")]
    Password(String),

    /// Token signing failure (unusable app secret)
    #[error("token signing error: {0}")]
    Signing(String),

    /// Any other internal failure, opaque to the caller
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create a signing error
    pub fn signing(msg: impl Into<String>) -> Self {
        DomainError::Signing(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
