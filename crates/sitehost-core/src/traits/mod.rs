//! Core traits defined in `sitehost-core` and implemented by other crates.

pub mod storage;

pub use storage::{StorageObjectMeta, StorageProvider};
