//! Per-tenant hosted content: upload, public serving, listing.

pub mod service;

pub use service::{PublishedSite, Served, ServedFile, SiteService, UploadedArtifact, site_url};
