//! # sitehost-database
//!
//! Credential persistence for SiteHost. The collection is a single JSON
//! document on disk, fronted by an in-memory copy and a single-writer lock.

pub mod json_file;
pub mod repositories;

pub use json_file::JsonFile;
pub use repositories::user::{JsonUserRepository, UserRepository};
