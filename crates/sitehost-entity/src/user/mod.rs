//! Credential records.

pub mod model;

pub use model::{PublicUser, UserRecord};
