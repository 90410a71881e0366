//! Convenience result type alias for SiteHost.

use crate::error::AppError;

/// A specialized `Result` type for SiteHost operations.
pub type AppResult<T> = Result<T, AppError>;
