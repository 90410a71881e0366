//! Credential store over a [`UserRepository`].

use std::sync::Arc;

use tracing::{info, warn};

use sitehost_core::config::AuthConfig;
use sitehost_core::error::{AppError, ErrorKind};
use sitehost_database::repositories::user::UserRepository;
use sitehost_entity::user::{PublicUser, UserRecord};

use crate::password::{CredentialValidator, PasswordHasher};

/// Registers and verifies credentials.
///
/// Hashing runs on the blocking thread pool so that a burst of logins does
/// not stall unrelated requests.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// Persistent record collection.
    repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Username/password policy.
    validator: CredentialValidator,
    /// Hash verified against when the username is unknown.
    dummy_hash: Arc<str>,
}

impl CredentialStore {
    /// Creates a credential store.
    pub fn new(repo: Arc<dyn UserRepository>, config: &AuthConfig) -> Result<Self, AppError> {
        let hasher = PasswordHasher::new();
        let dummy_hash = hasher.hash_password("sitehost-dummy-credential")?;

        Ok(Self {
            repo,
            hasher,
            validator: CredentialValidator::new(config),
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Registers a new non-admin user.
    ///
    /// Fails with `Validation` on a policy violation and `Conflict` if the
    /// username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<PublicUser, AppError> {
        self.validator.validate_username(username)?;
        self.validator.validate_password(password)?;

        if self.repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let hash = self.hash(password).await?;
        let record = UserRecord::tenant(username, hash);
        let public = record.to_public();

        self.repo.insert(record).await?;

        info!(username = %username, "User registered");
        Ok(public)
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown usernames and wrong passwords fail identically with
    /// `InvalidCredentials`; a hash is verified in both cases.
    pub async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, AppError> {
        let record = self.repo.find_by_username(username).await?;

        let hash = match &record {
            Some(r) => Arc::from(r.password_hash.as_str()),
            None => Arc::clone(&self.dummy_hash),
        };

        let matches = self.check(password, hash).await?;

        match record {
            Some(record) if matches => Ok(record),
            _ => {
                warn!(username = %username, "Rejected login attempt");
                Err(AppError::invalid_credentials())
            }
        }
    }

    /// Fails with `Configuration` if any stored hash cannot be verified.
    ///
    /// Run once at startup so that a store written by another hasher is
    /// refused instead of failing every login.
    pub async fn ensure_supported_hashes(&self) -> Result<(), AppError> {
        let users = self.repo.find_all().await?;
        if let Some(user) = users
            .iter()
            .find(|u| !self.hasher.is_supported_hash(&u.password_hash))
        {
            return Err(AppError::configuration(format!(
                "Credential store holds an unsupported password hash for '{}'",
                user.username
            )));
        }
        Ok(())
    }

    /// Creates the default admin if no record with its username exists.
    ///
    /// Returns `true` if a record was created.
    pub async fn seed_default_admin(&self, config: &AuthConfig) -> Result<bool, AppError> {
        let username = &config.default_admin_username;
        let password = &config.default_admin_password;

        if self.repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let hash = self.hash(password).await?;
        match self.repo.insert(UserRecord::admin(username.as_str(), hash)).await {
            Ok(()) => {
                info!(username = %username, "Seeded default admin");
                Ok(true)
            }
            Err(e) if e.is(ErrorKind::Conflict) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// All users, without password hashes.
    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    /// Number of stored credentials.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repo.count().await
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn check(&self, password: &str, hash: Arc<str>) -> Result<bool, AppError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}
