//! # sitehost-storage
//!
//! Storage providers for hosted tenant content.

pub mod mime;
pub mod providers;

pub use providers::local::{LocalStorageProvider, is_plain_segment};
