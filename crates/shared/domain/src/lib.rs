//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Everything the SSO service knows about users, client applications and
//! password hashing lives here.

pub mod app;
pub mod error;
pub mod password;
pub mod user;

pub use app::App;
pub use error::{DomainError, DomainResult};
pub use password::{HashParams, Hasher, Password};
pub use user::User;
