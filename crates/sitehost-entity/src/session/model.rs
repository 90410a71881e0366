//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// An in-memory session bound to an opaque client-held token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user.
    pub username: String,
    /// Privilege level captured at login.
    pub admin: bool,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last time the session was resolved.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session starting now.
    pub fn new(username: impl Into<String>, admin: bool) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            admin,
            created_at: now,
            last_activity: now,
        }
    }

    /// Whether the session has exceeded either timeout at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, idle: Duration, absolute: Duration) -> bool {
        now - self.last_activity >= idle || now - self.created_at >= absolute
    }

    /// The identity this session grants.
    pub fn identity(&self) -> Identity {
        if self.admin {
            Identity::Admin {
                username: self.username.clone(),
            }
        } else {
            Identity::User {
                username: self.username.clone(),
            }
        }
    }
}
