//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use sitehost_auth::require_authenticated;
use sitehost_core::error::AppError;
use sitehost_entity::session::Identity;

/// Context for an authenticated request.
///
/// Built once per request from the resolved [`Identity`]; anonymous
/// callers never get one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's identity.
    pub identity: Identity,
    /// The caller's username.
    pub username: String,
}

impl RequestContext {
    /// Creates a context for an authenticated identity.
    ///
    /// Fails with `Unauthenticated` for [`Identity::Anonymous`].
    pub fn authenticated(identity: Identity) -> Result<Self, AppError> {
        let username = require_authenticated(&identity)?.to_owned();
        Ok(Self {
            identity,
            username,
        })
    }

    /// Whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }
}
