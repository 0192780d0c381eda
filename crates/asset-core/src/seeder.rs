//! Legacy Table Seeder
//!
//! One-time import of rows already rendered into the host page, run only
//! while the store is empty.

use crate::domain::{AssetRecord, AssetStore, Category, NewAsset, StorageResult};
use crate::repository::{AssetRepository, KeyValueStorage};

/// Cell texts of one pre-rendered table, header row included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTable {
    pub category: Category,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store already had records; nothing written
    Skipped,
    Seeded { records: usize, counter: u64 },
}

pub fn seed<S: KeyValueStorage>(repo: &AssetRepository<S>, tables: &[LegacyTable]) -> StorageResult<SeedOutcome> {
    if !repo.load().is_empty() {
        return Ok(SeedOutcome::Skipped);
    }

    let mut store = AssetStore::default();
    let mut max_id = 0;
    for table in tables {
        let records = store.records_mut(table.category);
        for cells in table.rows.iter().skip(1) {
            let Some(record) = record_from_cells(cells) else {
                continue;
            };
            max_id = max_id.max(record.id);
            records.push(record);
        }
    }

    // next add mints max_id + 1
    repo.set_counter(max_id)?;
    repo.save(&store)?;

    let records = store.len();
    log::info!("[SEED] Imported {} legacy rows, counter={}", records, max_id);
    Ok(SeedOutcome::Seeded { records, counter: max_id })
}

fn record_from_cells(cells: &[String]) -> Option<AssetRecord> {
    let [id, name, qty, cond, ..] = cells else {
        return None;
    };
    Some(AssetRecord::new(
        id.trim().parse().unwrap_or(0),
        NewAsset::new(name.trim(), qty.trim(), cond.trim()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStorage, StorageKeys};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn furniture_table() -> LegacyTable {
        LegacyTable {
            category: Category::Furniture,
            rows: vec![
                row(&["ID", "Name", "Qty", "Condition", "Action"]),
                row(&["3", "Chair", "2", "Good", "Delete"]),
                row(&["1", "Desk", "1", "Fair", "Delete"]),
            ],
        }
    }

    #[test]
    fn test_seed_preserves_order_and_sets_counter_to_max() {
        let repo = AssetRepository::new(MemoryStorage::new(), StorageKeys::default());

        let outcome = seed(&repo, &[furniture_table()]).unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { records: 2, counter: 3 });

        let store = repo.load();
        let ids: Vec<u64> = store.furniture.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(store.furniture[0].name, "Chair");
        assert_eq!(repo.counter(), 3);
    }

    #[test]
    fn test_seed_twice_does_not_duplicate() {
        let repo = AssetRepository::new(MemoryStorage::new(), StorageKeys::default());
        seed(&repo, &[furniture_table()]).unwrap();

        assert_eq!(seed(&repo, &[furniture_table()]).unwrap(), SeedOutcome::Skipped);
        assert_eq!(repo.load().furniture.len(), 2);
    }

    #[test]
    fn test_short_rows_skipped_and_bad_ids_zero() {
        let repo = AssetRepository::new(MemoryStorage::new(), StorageKeys::default());
        let table = LegacyTable {
            category: Category::Electronics,
            rows: vec![
                row(&["ID", "Name", "Qty", "Condition"]),
                row(&["7", "Laptop"]),
                row(&["n/a", " Monitor ", "1", "New"]),
            ],
        };

        let outcome = seed(&repo, &[table]).unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { records: 1, counter: 0 });
        let store = repo.load();
        assert_eq!(store.electronics[0].id, 0);
        assert_eq!(store.electronics[0].name, "Monitor");
    }

    #[test]
    fn test_no_tables_writes_empty_store() {
        let repo = AssetRepository::new(MemoryStorage::new(), StorageKeys::default());
        assert_eq!(seed(&repo, &[]).unwrap(), SeedOutcome::Seeded { records: 0, counter: 0 });
        assert_eq!(repo.storage().get("assetCounter").unwrap().as_deref(), Some("0"));
        assert!(repo.storage().get("assets").unwrap().is_some());
    }
}
