//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sitehost_auth::{CredentialStore, SessionManager, SessionStore};
use sitehost_core::config::AppConfig;
use sitehost_service::{AdminService, SiteService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Credential store
    pub credentials: Arc<CredentialStore>,
    /// Live session table
    pub session_store: Arc<SessionStore>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Tenant content service
    pub site_service: Arc<SiteService>,
    /// Admin console service
    pub admin_service: Arc<AdminService>,
}
