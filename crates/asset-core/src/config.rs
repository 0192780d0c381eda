//! Tracker Configuration
//!
//! Optional JSON supplied by the host page. Every field falls back to its
//! default when omitted.

use serde::Deserialize;

use crate::domain::ConfigError;
use crate::render::ViewMode;
use crate::repository::StorageKeys;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Persistent key holding the serialized store
    pub store_key: String,
    /// Persistent key holding the id counter
    pub counter_key: String,
    /// Session key holding the role flag
    pub role_key: String,
    /// Value of the role flag that unlocks add/delete
    pub admin_role: String,
    /// Where the page guard sends non-admins
    pub main_page: String,
    pub view_mode: ViewMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store_key: "assets".to_string(),
            counter_key: "assetCounter".to_string(),
            role_key: "role".to_string(),
            admin_role: "admin".to_string(),
            main_page: "index.html".to_string(),
            view_mode: ViewMode::Standard,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            store: self.store_key.clone(),
            counter: self.counter_key.clone(),
        }
    }
}
