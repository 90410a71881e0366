//! # sitehost-auth
//!
//! Authentication and authorization for SiteHost.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and username/password policy
//! - `credential`: Credential store: register, verify, default-admin seeding
//! - `session`: Session authority: login, resolve, logout, expiry sweeping
//! - `rbac`: Access gate predicates over a request [`Identity`]
//!
//! [`Identity`]: sitehost_entity::Identity

pub mod credential;
pub mod password;
pub mod rbac;
pub mod session;

pub use credential::CredentialStore;
pub use password::{CredentialValidator, PasswordHasher};
pub use rbac::{require_admin, require_authenticated};
pub use session::{SessionCleanup, SessionManager, SessionStore};
