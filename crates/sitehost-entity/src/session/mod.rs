//! Server-side sessions and request identity.

pub mod identity;
pub mod model;

pub use identity::Identity;
pub use model::Session;
