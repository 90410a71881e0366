//! Credential store: registration, verification, and first-boot seeding.

pub mod store;

pub use store::CredentialStore;
