//! Response DTOs.

use serde::{Deserialize, Serialize};

use sitehost_entity::user::PublicUser;

/// A user as shown in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Username.
    pub username: String,
    /// Admin flag.
    pub admin: bool,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            username: user.username,
            admin: user.admin,
        }
    }
}

/// The caller's own hosted site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSummaryResponse {
    /// Owner.
    pub username: String,
    /// Public URL of the namespace.
    pub site_url: String,
    /// Hosted file names.
    pub files: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Hosted-content store state.
    pub storage: String,
    /// Sessions currently held.
    pub active_sessions: usize,
}
