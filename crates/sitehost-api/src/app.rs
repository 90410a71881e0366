//! Application builder: wires repositories, auth, services, and the router
//! into a running server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use sitehost_auth::{CredentialStore, SessionCleanup, SessionManager, SessionStore};
use sitehost_core::config::AppConfig;
use sitehost_core::error::{AppError, ErrorKind};
use sitehost_core::traits::StorageProvider;
use sitehost_database::JsonUserRepository;
use sitehost_service::{AdminService, SiteService};
use sitehost_storage::LocalStorageProvider;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Opens persistent state and constructs every shared dependency.
///
/// Fails if a directory cannot be created or the credential file is
/// corrupt or holds hashes this build cannot verify. Seeds the default
/// admin on first boot.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    create_data_directories(&config).await?;

    let user_repo = Arc::new(JsonUserRepository::open(&config.storage.users_file).await?);

    let credentials = Arc::new(CredentialStore::new(user_repo, &config.auth)?);
    credentials.ensure_supported_hashes().await?;
    credentials.seed_default_admin(&config.auth).await?;

    let session_store = Arc::new(SessionStore::new(&config.session));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&credentials),
        Arc::clone(&session_store),
    ));

    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.sites_root).await?);
    let site_service = Arc::new(SiteService::new(Arc::clone(&storage)));
    let admin_service = Arc::new(AdminService::new(Arc::clone(&credentials), storage));

    Ok(AppState {
        config: Arc::new(config),
        credentials,
        session_store,
        session_manager,
        site_service,
        admin_service,
    })
}

/// Runs the SiteHost server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SiteHost server...");

    let state = build_state(config).await?;
    let config = Arc::clone(&state.config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionCleanup::new(
        Arc::clone(&state.session_store),
        config.session.cleanup_interval_minutes,
    )
    .spawn(shutdown_rx);

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    tracing::info!("SiteHost server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    let _ = shutdown_tx.send(true);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    if tokio::time::timeout(grace, sweeper).await.is_err() {
        tracing::warn!("Session sweeper did not stop within the grace period");
    }

    tracing::info!("SiteHost server shut down gracefully");
    Ok(())
}

async fn create_data_directories(config: &AppConfig) -> Result<(), AppError> {
    for dir in [&config.storage.data_root, &config.storage.sites_root] {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create dir '{dir}'"),
                e,
            )
        })?;
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
