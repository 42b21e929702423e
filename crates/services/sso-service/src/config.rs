//! SSO service configuration.

use std::env;

use domain::HashParams;

/// SSO service configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct SsoServiceConfig {
    /// Database connection string
    pub database_url: String,
    /// Lifetime of issued tokens in seconds (uniform for every token)
    pub token_ttl_seconds: i64,
    /// Argon2 cost factors for password hashing
    pub hash_params: HashParams,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl SsoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = HashParams::default();

        Self {
            database_url: env::var("DATABASE_URL")
                .or_else(|_| env::var("SSO_SERVICE_DATABASE_URL"))
                .unwrap_or_else(|_| "sqlite://sso.db?mode=rwc".to_string()),
            token_ttl_seconds: env::var("TOKEN_TTL_SECONDS")
                .or_else(|_| env::var("SSO_SERVICE_TOKEN_TTL_SECONDS"))
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            hash_params: HashParams {
                m_cost_kib: env::var("ARGON2_M_COST_KIB")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.m_cost_kib),
                t_cost: env::var("ARGON2_T_COST")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.t_cost),
                p_cost: env::var("ARGON2_P_COST")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.p_cost),
            },
            host: env::var("SSO_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SSO_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(44044),
        }
    }
}

impl Default for SsoServiceConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://sso.db?mode=rwc".to_string(),
            token_ttl_seconds: 3600,
            hash_params: HashParams::default(),
            host: "0.0.0.0".to_string(),
            port: 44044,
        }
    }
}
