//! Credential repository.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use sitehost_core::error::AppError;
use sitehost_core::result::AppResult;
use sitehost_entity::user::UserRecord;

use crate::json_file::JsonFile;

/// Store of credential records keyed by username.
///
/// Every method is atomic with respect to every other: `insert` checks for
/// an existing username and appends under the same critical section, so
/// two concurrent registrations of one name cannot both succeed.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a record by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// Insert a new record.
    ///
    /// Fails with `Conflict` if the username exists, compared ASCII
    /// case-insensitively: usernames name directories, and `Alice` and
    /// `alice` are one directory on case-insensitive filesystems.
    async fn insert(&self, record: UserRecord) -> AppResult<()>;

    /// All records in insertion order.
    async fn find_all(&self) -> AppResult<Vec<UserRecord>>;

    /// Number of records.
    async fn count(&self) -> AppResult<usize>;
}

/// [`UserRepository`] backed by a single JSON file.
///
/// The full collection is held in memory; every mutation rewrites the whole
/// file while the writer lock is held.
#[derive(Debug)]
pub struct JsonUserRepository {
    file: JsonFile,
    users: Mutex<Vec<UserRecord>>,
}

impl JsonUserRepository {
    /// Open the credential file at `path`, creating an empty one if absent.
    ///
    /// Fails with a configuration error if the file cannot be parsed or
    /// holds duplicate usernames.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let file = JsonFile::new(path);
        file.ensure_exists(&Vec::<UserRecord>::new()).await?;

        let users: Vec<UserRecord> = file.read().await?;

        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.username.as_str()) {
                return Err(AppError::configuration(format!(
                    "Credential store {} contains duplicate username '{}'",
                    file.path().display(),
                    user.username
                )));
            }
        }

        info!(path = %file.path().display(), users = users.len(), "Credential store loaded");

        Ok(Self {
            file,
            users: Mutex::new(users),
        })
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, record: UserRecord) -> AppResult<()> {
        let mut users = self.users.lock().await;

        if users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&record.username))
        {
            return Err(AppError::conflict("User already exists"));
        }

        users.push(record);
        if let Err(e) = self.file.write(&*users).await {
            users.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.lock().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.lock().await.len())
    }
}
