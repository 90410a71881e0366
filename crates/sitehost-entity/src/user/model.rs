//! User credential model.

use serde::{Deserialize, Serialize};

/// A persisted credential record.
///
/// `username` is the primary key and doubles as the tenant namespace key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, case-sensitive login name.
    pub username: String,
    /// PHC-format password hash.
    #[serde(alias = "password")]
    pub password_hash: String,
    /// Whether the user may use the admin console.
    #[serde(default)]
    pub admin: bool,
}

impl UserRecord {
    /// Create a regular (non-admin) record.
    pub fn tenant(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            admin: false,
        }
    }

    /// Create an admin record.
    pub fn admin(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            admin: true,
        }
    }

    /// Project to the public view, dropping the hash.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            username: self.username.clone(),
            admin: self.admin,
        }
    }
}

/// A credential record with the password hash removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Login name.
    pub username: String,
    /// Admin flag.
    pub admin: bool,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            admin: record.admin,
        }
    }
}
