//! # sitehost-entity
//!
//! Domain models shared by every SiteHost layer: persisted credential
//! records, their public projection, server-side sessions, and the
//! request identity derived from a session.

pub mod session;
pub mod user;

pub use session::{Identity, Session};
pub use user::{PublicUser, UserRecord};
