//! Request identity derived from a session.

use serde::{Deserialize, Serialize};

/// Who is making a request.
///
/// Privilege is carried by the variant itself, so every check over an
/// identity is an exhaustive `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Identity {
    /// No valid session.
    Anonymous,
    /// A logged-in tenant.
    User {
        /// Login name.
        username: String,
    },
    /// A logged-in administrator.
    Admin {
        /// Login name.
        username: String,
    },
}

impl Identity {
    /// The username, if authenticated.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::User { username } | Self::Admin { username } => Some(username),
        }
    }

    /// Whether a session backs this identity.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Whether this identity carries admin privilege.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }
}
