//! # sitehost-service
//!
//! Business logic for SiteHost. Each service is built from `Arc`-shared
//! dependencies at startup and receives a [`RequestContext`] for every
//! operation that acts on behalf of a caller.

pub mod admin;
pub mod context;
pub mod site;

pub use admin::AdminService;
pub use context::RequestContext;
pub use site::{PublishedSite, Served, ServedFile, SiteService, UploadedArtifact, site_url};
