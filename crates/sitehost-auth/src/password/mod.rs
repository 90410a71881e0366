//! Password hashing and credential policy enforcement.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::{CredentialValidator, is_valid_username};
