//! Tenant namespace service.
//!
//! Every tenant owns the directory `<sites_root>/<username>/`. Writes are
//! only ever addressed through the caller's own username, so one tenant can
//! never reach another's namespace.

use std::sync::Arc;

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use tracing::{info, warn};

use sitehost_auth::password::is_valid_username;
use sitehost_core::error::{AppError, ErrorKind};
use sitehost_core::traits::StorageProvider;
use sitehost_storage::is_plain_segment;
use sitehost_storage::mime::mime_from_path;

use crate::context::RequestContext;

/// Longest accepted artifact file name, in bytes.
const MAX_FILE_NAME_BYTES: usize = 255;

/// Served when a directory is requested.
const INDEX_FILE: &str = "index.html";

/// Fallback content type.
const OCTET_STREAM: &str = "application/octet-stream";

/// Bytes escaped when a path segment is written into a redirect location.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A single uploaded file.
#[derive(Debug, Clone)]
pub struct UploadedArtifact {
    /// Client-supplied file name.
    pub file_name: String,
    /// File content.
    pub data: Bytes,
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedSite {
    /// Owning tenant.
    pub username: String,
    /// Stored file name.
    pub file_name: String,
    /// Public URL of the uploaded file.
    pub url: String,
}

/// A file ready to be returned to a visitor.
#[derive(Debug, Clone)]
pub struct ServedFile {
    /// File content.
    pub bytes: Bytes,
    /// Guessed content type.
    pub content_type: &'static str,
}

/// Result of a public lookup.
#[derive(Debug, Clone)]
pub enum Served {
    /// A file to return.
    File(ServedFile),
    /// A directory was requested without its trailing slash; the visitor
    /// belongs at this location instead, so relative links resolve inside
    /// the namespace.
    Redirect(String),
}

/// Public URL of a tenant's namespace.
pub fn site_url(username: &str) -> String {
    format!("/site/{username}/")
}

/// Uploads, serves, and lists hosted content.
#[derive(Debug, Clone)]
pub struct SiteService {
    /// Storage rooted at the hosted-content directory.
    storage: Arc<dyn StorageProvider>,
}

impl SiteService {
    /// Creates a new site service.
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Stores an artifact in the caller's namespace, replacing any file of
    /// the same name.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        artifact: UploadedArtifact,
    ) -> Result<PublishedSite, AppError> {
        let file_name = artifact.file_name;
        if file_name.len() > MAX_FILE_NAME_BYTES || !is_plain_segment(&file_name) {
            return Err(AppError::validation("Invalid file name"));
        }

        let size = artifact.data.len();
        self.storage
            .write(&format!("{}/{file_name}", ctx.username), artifact.data)
            .await?;

        info!(username = %ctx.username, file_name = %file_name, bytes = size, "Artifact published");

        Ok(PublishedSite {
            url: format!("{}{file_name}", site_url(&ctx.username)),
            username: ctx.username.clone(),
            file_name,
        })
    }

    /// Looks up hosted content for public serving.
    ///
    /// `path` is the request path after `/site/<username>`, e.g. `""`,
    /// `"/"` or `"/docs/page.html"`. Anything that is not inside
    /// `username`'s namespace is `NotFound`, including malformed paths.
    /// Directories serve their `index.html` when requested with a trailing
    /// slash and redirect to the slashed location otherwise.
    pub async fn serve(&self, username: &str, path: &str) -> Result<Served, AppError> {
        if !is_valid_username(username) {
            return Err(not_found());
        }

        let mut target = username.to_owned();
        let mut location = format!("/site/{}", utf8_percent_encode(username, SEGMENT));
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !is_plain_segment(segment) {
                return Err(not_found());
            }
            target.push('/');
            target.push_str(segment);
            location.push('/');
            location.extend(utf8_percent_encode(segment, SEGMENT));
        }

        let meta = self.storage.metadata(&target).await.map_err(hide)?;
        if meta.is_directory {
            if !path.ends_with('/') {
                location.push('/');
                return Ok(Served::Redirect(location));
            }
            target.push('/');
            target.push_str(INDEX_FILE);
        }

        let bytes = self.storage.read_bytes(&target).await.map_err(hide)?;
        Ok(Served::File(ServedFile {
            bytes,
            content_type: mime_from_path(&target).unwrap_or(OCTET_STREAM),
        }))
    }

    /// Whether the hosted-content store is reachable.
    pub async fn storage_available(&self) -> bool {
        match self.storage.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                false
            }
        }
    }

    /// File names currently hosted by `username`.
    pub async fn list_artifacts(&self, username: &str) -> Result<Vec<String>, AppError> {
        let entries = self.storage.list(username).await?;
        Ok(entries
            .into_iter()
            .filter(|e| !e.is_directory)
            .filter_map(|e| e.path.rsplit('/').next().map(str::to_owned))
            .collect())
    }
}

fn not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Collapses lookup failures into `NotFound`; real I/O failures pass through.
fn hide(e: AppError) -> AppError {
    if e.is(ErrorKind::NotFound) || e.is(ErrorKind::Validation) {
        not_found()
    } else {
        e
    }
}
