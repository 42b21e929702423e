//! Storage ports consumed by the auth domain service.
//!
//! Three narrow capability traits instead of one wide repository: the
//! domain service only ever needs to save a user, look users up, and
//! resolve an application. All implementations must be safe for
//! concurrent invocation from parallel in-flight requests.

pub mod database;
pub mod entities;
pub mod memory;

pub use database::SqlStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use common::AppResult;
use domain::{App, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persists newly registered users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Save a new user and return its assigned id.
    ///
    /// A duplicate email fails with `AppError::UserAlreadyExists`.
    async fn save_user(&self, email: &str, pass_hash: &str) -> AppResult<i64>;
}

/// Looks up users and their privileges.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Fetch a user by exact email match.
    ///
    /// An unknown email fails with `AppError::NotFound`.
    async fn user_by_email(&self, email: &str) -> AppResult<User>;

    /// Check whether a user has admin privileges.
    ///
    /// An unknown user id fails with `AppError::NotFound`.
    async fn is_admin(&self, user_id: i64) -> AppResult<bool>;
}

/// Resolves client applications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Fetch an application by id.
    ///
    /// An unknown app id fails with `AppError::NotFound`.
    async fn app(&self, app_id: i32) -> AppResult<App>;
}
