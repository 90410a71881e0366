//! Whole-document JSON persistence with atomic replacement.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use sitehost_core::error::{AppError, ErrorKind};
use sitehost_core::result::AppResult;

/// A JSON document stored at a fixed path.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Wrap the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document with `initial` content if it does not exist yet.
    pub async fn ensure_exists<T: Serialize>(&self, initial: &T) -> AppResult<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        self.write(initial).await
    }

    /// Read and parse the document.
    ///
    /// A parse failure is reported as a configuration error: a corrupt
    /// document must stop startup rather than be silently replaced.
    pub async fn read<T: DeserializeOwned>(&self) -> AppResult<T> {
        let raw = fs::read(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read {}", self.path.display()),
                e,
            )
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Corrupt JSON document at {}: {e}", self.path.display()),
                e,
            )
        })
    }

    /// Serialize `value` and atomically replace the document.
    pub async fn write<T: Serialize>(&self, value: &T) -> AppResult<()> {
        let body = serde_json::to_vec_pretty(value)?;
        let tmp = self.temp_path();

        fs::write(&tmp, &body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), bytes = body.len(), "Wrote JSON document");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
