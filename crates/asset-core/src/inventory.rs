//! Inventory Mutators
//!
//! Each mutation is one load, mutate, save sequence over the whole snapshot.
//! The caller re-renders afterwards.

use crate::domain::{AssetRecord, AssetStore, Category, NewAsset, StorageError, StorageResult};
use crate::repository::{AssetRepository, KeyValueStorage};

pub struct Inventory<S> {
    repo: AssetRepository<S>,
}

impl<S: KeyValueStorage> Inventory<S> {
    pub fn new(repo: AssetRepository<S>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &AssetRepository<S> {
        &self.repo
    }

    /// Fresh snapshot from storage
    pub fn snapshot(&self) -> AssetStore {
        self.repo.load()
    }

    /// Append a record with id = counter + 1
    pub fn add_asset(&self, category: Category, asset: NewAsset) -> StorageResult<AssetRecord> {
        let counter = self.repo.counter();
        let id = counter.checked_add(1).ok_or(StorageError::IdsExhausted(counter))?;
        let mut store = self.repo.load();
        let record = AssetRecord::new(id, asset);
        store.records_mut(category).push(record.clone());
        self.repo.save(&store)?;
        self.repo.set_counter(id)?;
        log::info!("[INVENTORY] Added #{} to {}", id, category);
        Ok(record)
    }

    /// Remove the record with `id` from `category`; returns whether one was found.
    ///
    /// The counter is left alone so ids are never reused.
    pub fn delete_asset(&self, category: Category, id: u64) -> StorageResult<bool> {
        let mut store = self.repo.load();
        let records = store.records_mut(category);
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.repo.save(&store)?;
        if removed {
            log::info!("[INVENTORY] Deleted #{} from {}", id, category);
        } else {
            log::debug!("[INVENTORY] No #{} in {}, nothing deleted", id, category);
        }
        Ok(removed)
    }
}
