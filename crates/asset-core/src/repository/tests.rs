//! Repository Integration Tests
//!
//! Storage accessor and mutators against `MemoryStorage`.

#[cfg(test)]
mod tests {
    use crate::domain::{AssetStore, Category, NewAsset, StorageError};
    use crate::inventory::Inventory;
    use crate::repository::{AssetRepository, KeyValueStorage, MemoryStorage, StorageKeys};
    use crate::seeder::{seed, LegacyTable};

    fn setup_repo(storage: MemoryStorage) -> AssetRepository<MemoryStorage> {
        AssetRepository::new(storage, StorageKeys::default())
    }

    fn setup_inventory() -> Inventory<MemoryStorage> {
        Inventory::new(setup_repo(MemoryStorage::new()))
    }

    fn asset(name: &str) -> NewAsset {
        NewAsset::new(name, "1", "New")
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let repo = setup_repo(MemoryStorage::new());
        assert_eq!(repo.load(), AssetStore::default());
        assert_eq!(repo.counter(), 0);
    }

    #[test]
    fn test_load_corrupt_returns_empty() {
        let repo = setup_repo(MemoryStorage::with_entries([("assets", "{not json")]));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_corrupt_blob_overwritten_on_next_write() {
        let inv = Inventory::new(setup_repo(MemoryStorage::with_entries([("assets", "[[[")])));
        inv.add_asset(Category::Furniture, asset("Shelf")).unwrap();

        let raw = inv.repository().storage().get("assets").unwrap().unwrap();
        let store: AssetStore = serde_json::from_str(&raw).unwrap();
        assert_eq!(store.furniture.len(), 1);
    }

    #[test]
    fn test_counter_parsing() {
        let repo = setup_repo(MemoryStorage::with_entries([("assetCounter", "  7 ")]));
        assert_eq!(repo.counter(), 7);

        let repo = setup_repo(MemoryStorage::with_entries([("assetCounter", "seven")]));
        assert_eq!(repo.counter(), 0);
    }

    #[test]
    fn test_save_load_is_fixed_point() {
        let blob = r#"{"electronics":[{"id":5,"name":"TV","qty":2,"cond":"Good"}],"furniture":[],"stationery":[{"id":6,"name":"Ink","qty":"3 bottles","cond":"New"}]}"#;
        let repo = setup_repo(MemoryStorage::with_entries([("assets", blob)]));

        let first = repo.load();
        repo.save(&first).unwrap();
        let once = repo.storage().get("assets").unwrap();
        repo.save(&repo.load()).unwrap();
        let twice = repo.storage().get("assets").unwrap();

        assert_eq!(repo.load(), first);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_keys() {
        let keys = StorageKeys { store: "inv".into(), counter: "inv-seq".into() };
        let inv = Inventory::new(AssetRepository::new(MemoryStorage::new(), keys));
        inv.add_asset(Category::Stationery, asset("Pens")).unwrap();

        let storage = inv.repository().storage();
        assert_eq!(storage.get("inv-seq").unwrap().as_deref(), Some("1"));
        assert!(storage.get("assets").unwrap().is_none());
    }

    #[test]
    fn test_ids_strictly_increase_across_categories() {
        let inv = setup_inventory();
        let mut ids = Vec::new();
        for (i, category) in Category::ALL.iter().cycle().take(9).enumerate() {
            ids.push(inv.add_asset(*category, asset(&format!("Item {}", i))).unwrap().id);
        }
        assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
        assert_eq!(inv.repository().counter(), 9);
    }

    #[test]
    fn test_ids_unique_under_interleaved_deletes() {
        let inv = setup_inventory();
        let a = inv.add_asset(Category::Electronics, asset("A")).unwrap();
        let b = inv.add_asset(Category::Furniture, asset("B")).unwrap();
        inv.delete_asset(Category::Furniture, b.id).unwrap();
        let c = inv.add_asset(Category::Furniture, asset("C")).unwrap();
        inv.delete_asset(Category::Electronics, a.id).unwrap();
        let d = inv.add_asset(Category::Electronics, asset("D")).unwrap();

        assert_eq!((a.id, b.id, c.id, d.id), (1, 2, 3, 4));
    }

    #[test]
    fn test_delete_then_add_never_reuses_id() {
        let blob = r#"{"electronics":[{"id":5,"name":"Laptop","qty":"1","cond":"Good"}],"furniture":[],"stationery":[]}"#;
        let inv = Inventory::new(setup_repo(MemoryStorage::with_entries([("assets", blob), ("assetCounter", "5")])));

        assert!(inv.delete_asset(Category::Electronics, 5).unwrap());
        let monitor = inv.add_asset(Category::Electronics, NewAsset::new("Monitor", "1", "New")).unwrap();

        assert_eq!(monitor.id, 6);
        assert_eq!(inv.snapshot().electronics, vec![monitor]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let inv = setup_inventory();
        inv.add_asset(Category::Furniture, asset("Desk")).unwrap();

        assert!(!inv.delete_asset(Category::Furniture, 42).unwrap());
        // right id, wrong category
        assert!(!inv.delete_asset(Category::Electronics, 1).unwrap());
        assert_eq!(inv.snapshot().furniture.len(), 1);
        assert_eq!(inv.repository().counter(), 1);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let inv = setup_inventory();
        for name in ["A", "B", "C", "D"] {
            inv.add_asset(Category::Stationery, asset(name)).unwrap();
        }
        inv.delete_asset(Category::Stationery, 2).unwrap();

        let names: Vec<String> = inv.snapshot().stationery.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_seed_then_add_continues_from_max() {
        let inv = setup_inventory();
        let table = LegacyTable {
            category: Category::Furniture,
            rows: vec![
                vec!["ID".into(), "Name".into(), "Qty".into(), "Condition".into()],
                vec!["3".into(), "Chair".into(), "2".into(), "Good".into()],
                vec!["1".into(), "Desk".into(), "1".into(), "Fair".into()],
            ],
        };
        seed(inv.repository(), &[table]).unwrap();

        let lamp = inv.add_asset(Category::Furniture, NewAsset::new("Lamp", "4", "New")).unwrap();
        assert_eq!(lamp.id, 4);
        let ids: Vec<u64> = inv.snapshot().furniture.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn test_counter_beyond_u32_keeps_minting() {
        let repo = setup_repo(MemoryStorage::with_entries([("assetCounter", "5000000000")]));
        assert_eq!(repo.counter(), 5_000_000_000);

        let inv = Inventory::new(repo);
        let rec = inv.add_asset(Category::Electronics, asset("Server")).unwrap();
        assert_eq!(rec.id, 5_000_000_001);
        assert_eq!(inv.repository().counter(), 5_000_000_001);
    }

    #[test]
    fn test_exhausted_counter_is_an_error_not_a_wrap() {
        let max = u64::MAX.to_string();
        let inv = Inventory::new(setup_repo(MemoryStorage::with_entries([("assetCounter", max.as_str())])));

        let err = inv.add_asset(Category::Furniture, asset("Bench")).unwrap_err();
        assert_eq!(err, StorageError::IdsExhausted(u64::MAX));
        assert!(inv.snapshot().is_empty());
        assert_eq!(inv.repository().counter(), u64::MAX);
    }

    #[test]
    fn test_counter_digits_beyond_u64_saturate() {
        let repo = setup_repo(MemoryStorage::with_entries([("assetCounter", "99999999999999999999999")]));
        assert_eq!(repo.counter(), u64::MAX);
        assert!(Inventory::new(repo).add_asset(Category::Stationery, asset("Pad")).is_err());
    }

    #[test]
    fn test_incomplete_record_keeps_neighbours() {
        let blob = r#"{"electronics":[{"id":1,"name":"TV","qty":"1","cond":"Good"}],"furniture":[{"id":2,"name":"Desk","qty":"1"}],"stationery":[]}"#;
        let inv = Inventory::new(setup_repo(MemoryStorage::with_entries([("assets", blob), ("assetCounter", "2")])));

        assert_eq!(inv.snapshot().len(), 2);
        inv.add_asset(Category::Stationery, asset("Pen")).unwrap();

        let store = inv.snapshot();
        assert_eq!(store.electronics[0].name, "TV");
        assert_eq!(store.furniture[0].name, "Desk");
        assert_eq!(store.furniture[0].cond, "");
        assert_eq!(store.stationery[0].id, 3);
    }

    #[test]
    fn test_seed_counter_is_max_across_all_tables() {
        fn table(category: Category, rows: &[(&str, &str)]) -> LegacyTable {
            let mut cells = vec![vec!["ID".to_string(), "Name".into(), "Qty".into(), "Condition".into()]];
            cells.extend(rows.iter().map(|(id, name)| vec![id.to_string(), name.to_string(), "1".into(), "Good".into()]));
            LegacyTable { category, rows: cells }
        }

        let inv = setup_inventory();
        let tables = [
            table(Category::Electronics, &[("4", "Laptop"), ("2", "Phone")]),
            table(Category::Furniture, &[("11", "Cabinet"), ("6", "Chair")]),
            table(Category::Stationery, &[("9", "Pens"), ("1", "Ink")]),
        ];
        seed(inv.repository(), &tables).unwrap();

        assert_eq!(inv.repository().counter(), 11);
        let store = inv.snapshot();
        let ids = |c: Category| store.records(c).iter().map(|r| r.id).collect::<Vec<u64>>();
        assert_eq!(ids(Category::Electronics), vec![4, 2]);
        assert_eq!(ids(Category::Furniture), vec![11, 6]);
        assert_eq!(ids(Category::Stationery), vec![9, 1]);

        let next = inv.add_asset(Category::Electronics, asset("Monitor")).unwrap();
        assert_eq!(next.id, 12);
    }
}
