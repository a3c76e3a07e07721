//! Claims System - API Server Binary
//!
//! This binary starts the HTTP API server for the claims system.
//!
//! # Usage
//!
//! ```bash
//! # Run against PostgreSQL (default)
//! DATABASE_URL=postgres://... cargo run --bin claims-api
//!
//! # Run with the in-memory store (no database required)
//! API_STORE_MODE=memory cargo run --bin claims-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_STORE_MODE` - `postgres` or `memory` (default: postgres)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_records::RecordService;
use infra_store::{MemoryStore, PgRecordStore};
use interface_api::{
    config::{ApiConfig, StoreMode},
    create_router,
};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires up the selected store
/// adapter, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        mode = ?config.store_mode,
        "Starting Claims System API Server"
    );

    let service = build_service(&config).await?;
    let app = create_router(service, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual env vars and defaults if the prefixed source
/// is incomplete.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("API_DATABASE_URL"))
                .unwrap_or(defaults.database_url),
            store_mode: match std::env::var("API_STORE_MODE").as_deref() {
                Ok("memory") => StoreMode::Memory,
                _ => StoreMode::Postgres,
            },
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Wires up the record service over the configured store adapter.
///
/// Postgres mode connects a pool and creates the schema; memory mode
/// needs no external services.
async fn build_service(config: &ApiConfig) -> anyhow::Result<RecordService> {
    match config.store_mode {
        StoreMode::Memory => {
            tracing::info!("Using in-memory store");
            Ok(RecordService::new(Arc::new(MemoryStore::new())))
        }
        StoreMode::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .min_connections(2)
                .acquire_timeout(std::time::Duration::from_secs(30))
                .connect(&config.database_url)
                .await?;

            let store = PgRecordStore::new(pool);
            store.migrate().await?;

            tracing::info!("Database ready");
            Ok(RecordService::new(Arc::new(store)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
