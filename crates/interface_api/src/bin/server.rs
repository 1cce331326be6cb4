//! Inference Pipeline - API Server Binary
//!
//! This binary starts the HTTP API server for the inference pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory record store
//! cargo run --bin inference-api
//!
//! # Run against PostgreSQL
//! API_PORT=8080 API_DATABASE_URL=postgres://... cargo run --bin inference-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string; in-memory store when unset
//! * `API_DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use core_kernel::{RandomIdentifierService, RecordStore};
use infra_db::{create_pool, DatabaseConfig, InMemoryRecordStore, PgRecordStore};
use interface_api::{config::ApiConfig, create_router, AppState, UnconfiguredDescriptionService};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting inference pipeline API server"
    );

    let store = create_store(&config).await?;
    let state = AppState::new(
        store,
        Arc::new(UnconfiguredDescriptionService),
        Arc::new(RandomIdentifierService),
        config.clone(),
    );
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from `API_*` variables, falling back to defaults
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid API configuration ({e}), using defaults");
        ApiConfig::default()
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Opens the PostgreSQL store and creates its schema, or falls back to memory
async fn create_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::info!("No database configured, using the in-memory record store");
        return Ok(Arc::new(InMemoryRecordStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = create_pool(
        DatabaseConfig::new(url).max_connections(config.database_max_connections),
    )
    .await
    .context("failed to connect to the record store database")?;

    let store = PgRecordStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("failed to create the record store schema")?;

    tracing::info!("Database ready");
    Ok(Arc::new(store))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
