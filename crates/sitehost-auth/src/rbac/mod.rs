//! Access gate over request identities.

pub mod guard;

pub use guard::{require_admin, require_authenticated};
