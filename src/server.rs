//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, the audit worker and the Axum
//! server lifecycle.

use crate::application::services::{AuditService, UrlService};
use crate::config::Config;
use crate::domain::audit_worker::run_audit_worker;
use crate::infrastructure::persistence::{PgErrorLogRepository, PgUrlRepository, ensure_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Background audit worker
/// - Axum HTTP server with graceful shutdown
///
/// On Ctrl+C or SIGTERM the server stops accepting connections, finishes
/// in-flight requests and then waits for the audit worker to drain its queue.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;

    ensure_schema(&pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Database schema is up to date");

    let pool = Arc::new(pool);
    let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let error_log_repository = Arc::new(PgErrorLogRepository::new(pool.clone()));

    let (audit_tx, audit_rx) = mpsc::channel(config.audit_queue_capacity);
    let worker = tokio::spawn(run_audit_worker(audit_rx, error_log_repository));
    tracing::info!("Audit worker started");

    let url_service = UrlService::new(url_repository)
        .with_code_policy(config.short_code_length, config.short_code_max_attempts);

    let state = AppState::new(Arc::new(url_service), AuditService::new(audit_tx))
        .with_public_base_url(config.public_base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped, draining audit queue");
    if let Err(e) = worker.await {
        tracing::error!(error = ?e, "Audit worker task failed");
    }

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Applies database migrations and exits.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn migrate(config: Config) -> Result<()> {
    let pool = connect(&config).await?;

    ensure_schema(&pool)
        .await
        .context("Failed to apply database migrations")?;

    tracing::info!("Migrations applied");
    pool.close().await;
    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
///
/// If a handler cannot be installed the error is logged and that signal is
/// never observed.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
