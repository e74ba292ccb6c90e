//! HTTP server initialization and runtime setup.
//!
//! Handles storage bootstrap, service wiring, and the Axum server lifecycle.

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::AliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::normalize_path::NormalizePath;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite storage and schema
/// - Link service and shared state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened or its schema created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;
    tracing::info!("Storage ready");

    let state = build_state(store, &config);
    let app = NormalizePath::trim_trailing_slash(app_router(
        state,
        Duration::from_secs(config.http_timeout_seconds),
    ));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Opens the configured database, creating its directory and schema.
pub async fn open_store(config: &Config) -> Result<SqliteMappingStore> {
    if let Some(parent) = config
        .storage_file_path()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("Failed to create storage directory {}", parent.display()))?;
    }

    let store = SqliteMappingStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to init storage")?;

    Ok(store)
}

/// Wires the link service and credentials into the shared state.
pub fn build_state(store: SqliteMappingStore, config: &Config) -> AppState {
    let link_service = Arc::new(LinkService::new(
        Arc::new(store),
        AliasGenerator::new(config.alias_length),
        config.alias_attempts,
    ));
    let credentials = Arc::new(BasicCredentials::new(
        config.auth_user.clone(),
        config.auth_password.clone(),
    ));

    AppState::new(link_service, credentials)
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
