//! Authorization predicates.
//!
//! Pure functions of the identity; no I/O.

use sitehost_core::error::AppError;
use sitehost_entity::session::Identity;

/// Requires a logged-in caller and returns its username.
pub fn require_authenticated(identity: &Identity) -> Result<&str, AppError> {
    match identity {
        Identity::User { username } | Identity::Admin { username } => Ok(username),
        Identity::Anonymous => Err(AppError::unauthenticated("Login required")),
    }
}

/// Requires an admin caller and returns its username.
pub fn require_admin(identity: &Identity) -> Result<&str, AppError> {
    match identity {
        Identity::Admin { username } => Ok(username),
        Identity::User { .. } => Err(AppError::forbidden("Admins only")),
        Identity::Anonymous => Err(AppError::unauthenticated("Login required")),
    }
}
