//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sitehost_core::error::AppError;

/// Login and registration form body.
///
/// Missing fields deserialize as empty so that validation, not the form
/// extractor, rejects them.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsForm {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialsForm {
    /// Runs field validation, mapping failures to `Validation`.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(self)
    }
}
