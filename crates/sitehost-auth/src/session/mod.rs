//! Session lifecycle: login, resolution, logout, and expiry sweeping.

pub mod cleanup;
pub mod manager;
pub mod store;

pub use cleanup::SessionCleanup;
pub use manager::SessionManager;
pub use store::SessionStore;
