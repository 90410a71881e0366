//! Admin service: user listing and tenant purge.

use std::sync::Arc;

use tracing::info;

use sitehost_auth::password::is_valid_username;
use sitehost_auth::{CredentialStore, require_admin};
use sitehost_core::error::AppError;
use sitehost_core::traits::StorageProvider;
use sitehost_entity::user::PublicUser;

use crate::context::RequestContext;

/// Privileged operations over users and their namespaces.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Credential store.
    credentials: Arc<CredentialStore>,
    /// Storage rooted at the hosted-content directory.
    storage: Arc<dyn StorageProvider>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(credentials: Arc<CredentialStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            credentials,
            storage,
        }
    }

    /// Lists every user without password hashes.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<PublicUser>, AppError> {
        let admin = require_admin(&ctx.identity)?;
        let users = self.credentials.list_users().await?;
        info!(admin = %admin, count = users.len(), "Admin listed users");
        Ok(users)
    }

    /// Removes all hosted content of `target`.
    ///
    /// The credential record is left alone; deleting a namespace that does
    /// not exist succeeds.
    pub async fn delete_tenant(&self, ctx: &RequestContext, target: &str) -> Result<(), AppError> {
        let admin = require_admin(&ctx.identity)?;

        if !is_valid_username(target) {
            return Err(AppError::validation("Invalid username"));
        }

        self.storage.delete_dir(target).await?;
        info!(admin = %admin, target = %target, "Tenant content deleted");
        Ok(())
    }
}
