//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential policy and first-boot admin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Username of the admin seeded on first boot.
    #[serde(default = "default_admin_username")]
    pub default_admin_username: String,
    /// Password of the admin seeded on first boot.
    #[serde(default = "default_admin_password")]
    pub default_admin_password: String,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum username length accepted at registration.
    #[serde(default = "default_username_max")]
    pub username_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_admin_username: default_admin_username(),
            default_admin_password: default_admin_password(),
            password_min_length: default_password_min(),
            username_max_length: default_username_max(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_password_min() -> usize {
    1
}

fn default_username_max() -> usize {
    64
}
