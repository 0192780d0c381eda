//! Asset Repository
//!
//! Reads and writes the whole store and the id counter. Callers always load
//! a fresh snapshot before acting and save the entire mutated snapshot back.

use crate::domain::{AssetStore, StorageError, StorageResult};
use super::KeyValueStorage;

/// Keys of the two persisted entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub store: String,
    pub counter: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            store: "assets".to_string(),
            counter: "assetCounter".to_string(),
        }
    }
}

pub struct AssetRepository<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStorage> AssetRepository<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the store; absent, unreadable or corrupt data yields the empty store.
    ///
    /// A corrupt blob is dropped here and overwritten by the next save.
    pub fn load(&self) -> AssetStore {
        let raw = match self.storage.get(&self.keys.store) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AssetStore::default(),
            Err(e) => {
                log::warn!("[STORE] Read failed, using empty store: {}", e);
                return AssetStore::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("[STORE] Discarding corrupt `{}` blob: {}", self.keys.store, e);
                AssetStore::default()
            }
        }
    }

    /// Serialize and write the full store
    pub fn save(&self, store: &AssetStore) -> StorageResult<()> {
        let json = serde_json::to_string(store).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(&self.keys.store, &json)
    }

    /// Highest id ever assigned; missing or non-numeric reads as 0.
    ///
    /// A digit string too large for `u64` saturates, so minting fails
    /// instead of restarting at 1.
    pub fn counter(&self) -> u64 {
        match self.storage.get(&self.keys.counter) {
            Ok(Some(raw)) => parse_counter(&raw),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("[STORE] Counter read failed, treating as 0: {}", e);
                0
            }
        }
    }

    pub fn set_counter(&self, value: u64) -> StorageResult<()> {
        self.storage.set(&self.keys.counter, &value.to_string())
    }
}

fn parse_counter(raw: &str) -> u64 {
    let text = raw.trim();
    match text.parse() {
        Ok(value) => value,
        Err(_) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            log::warn!("[STORE] Counter {:?} exceeds the id range", raw);
            u64::MAX
        }
        Err(_) => {
            log::warn!("[STORE] Non-numeric counter {:?}, treating as 0", raw);
            0
        }
    }
}
