//! SSO Service Library
//!
//! Registers users, verifies credentials, issues per-application signed
//! tokens and answers privilege queries over gRPC.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod service;
pub mod storage;
pub mod token;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Duration;
use tonic::transport::Server;
use tracing::info;

use crate::config::SsoServiceConfig;
use crate::grpc::AuthGrpcService;
use crate::infra::Database;
use crate::service::Authenticator;
use crate::storage::SqlStorage;
use crate::token::TokenIssuer;
use domain::Hasher;

/// Run the gRPC server with configuration from the environment.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = SsoServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: SsoServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database_url).await?;

    // One storage backend serves all three ports
    let storage = Arc::new(SqlStorage::new(db.get_connection()));

    // Hasher construction validates the configured cost factors up front
    let hasher = Hasher::new(config.hash_params)?;
    let tokens = TokenIssuer::new(Duration::seconds(config.token_ttl_seconds));

    let auth_service = Arc::new(Authenticator::new(
        storage.clone(),
        storage.clone(),
        storage,
        hasher,
        tokens,
    ));

    // Create gRPC service
    let grpc_service = AuthGrpcService::new(auth_service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("SSO service listening on {}", addr);

    // Run server until a shutdown signal arrives
    Server::builder()
        .add_service(proto::AuthServer::new(grpc_service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("SSO service stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("shutdown signal received, stopping gRPC server");
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = SsoServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
