//! Common utilities shared across the SSO workspace.
//!
//! This crate provides the unified application error type and its
//! conversion to gRPC status codes.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
