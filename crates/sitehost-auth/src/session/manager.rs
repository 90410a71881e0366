//! Session lifecycle manager: login, resolve, logout.

use std::sync::Arc;

use tracing::info;

use sitehost_core::error::AppError;
use sitehost_entity::session::{Identity, Session};

use crate::credential::CredentialStore;

use super::store::SessionStore;

/// Issues and resolves sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Credential verification.
    credentials: Arc<CredentialStore>,
    /// Live sessions.
    store: Arc<SessionStore>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(credentials: Arc<CredentialStore>, store: Arc<SessionStore>) -> Self {
        Self { credentials, store }
    }

    /// Verifies credentials and opens a session.
    ///
    /// Returns the opaque token to hand to the client with the session it
    /// maps to. Fails with `InvalidCredentials` on any mismatch.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, Session), AppError> {
        let record = self.credentials.verify(username, password).await?;

        let session = Session::new(record.username, record.admin);
        let token = self.store.create(session.clone());

        info!(username = %session.username, admin = session.admin, "Session opened");
        Ok((token, session))
    }

    /// The live session for `token`, if any.
    pub fn current_session(&self, token: &str) -> Option<Session> {
        self.store.resolve(token)
    }

    /// The identity for an optional token. Missing, unknown, and expired
    /// tokens are all anonymous.
    pub fn identity(&self, token: Option<&str>) -> Identity {
        token
            .and_then(|t| self.current_session(t))
            .map_or(Identity::Anonymous, |s| s.identity())
    }

    /// Ends the session for `token`. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        if let Some(session) = self.store.remove(token) {
            info!(username = %session.username, "Session closed");
        }
    }

    /// Number of sessions held.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}
