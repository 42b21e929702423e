//! SeaORM entities for the SSO storage schema.

pub mod app;
pub mod user;
