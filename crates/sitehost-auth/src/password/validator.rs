//! Username and password policy enforcement for new credentials.
//!
//! Usernames become directory names under the hosted-content root, so the
//! username policy is what keeps one tenant's namespace from reaching into
//! another's. It is applied at registration, never relaxed later.

use sitehost_core::config::AuthConfig;
use sitehost_core::error::AppError;

/// Hard ceiling on username length, independent of configuration.
const USERNAME_HARD_MAX: usize = 255;

/// Whether `name` is usable as a username and namespace directory.
///
/// Allowed: ASCII letters, digits, `-`, `_`, `.`; must not start with `.`.
/// Logins match case-sensitively, but registration refuses a name that
/// differs from an existing one only in case, since the two would share a
/// directory on case-insensitive filesystems.
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= USERNAME_HARD_MAX
        && !name.starts_with('.')
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Validates new usernames and passwords against configured policies.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    /// Minimum password length.
    password_min_length: usize,
    /// Maximum username length.
    username_max_length: usize,
}

impl CredentialValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            password_min_length: config.password_min_length.max(1),
            username_max_length: config.username_max_length.clamp(1, USERNAME_HARD_MAX),
        }
    }

    /// Validates a username for registration.
    pub fn validate_username(&self, username: &str) -> Result<(), AppError> {
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        if username.len() > self.username_max_length {
            return Err(AppError::validation(format!(
                "Username must be at most {} characters long",
                self.username_max_length
            )));
        }

        if !is_valid_username(username) {
            return Err(AppError::validation(
                "Username may only contain letters, digits, '-', '_' and '.', and must not start with '.'",
            ));
        }

        Ok(())
    }

    /// Validates a password for registration.
    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }

        Ok(())
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
