//! Storage location configuration.

use serde::{Deserialize, Serialize};

/// Where credentials and hosted content live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// JSON file holding the credential collection.
    #[serde(default = "default_users_file")]
    pub users_file: String,
    /// Root directory of per-tenant hosted content.
    #[serde(default = "default_sites_root")]
    pub sites_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            users_file: default_users_file(),
            sites_root: default_sites_root(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_users_file() -> String {
    "./data/users.json".to_string()
}

fn default_sites_root() -> String {
    "./uploads".to_string()
}
