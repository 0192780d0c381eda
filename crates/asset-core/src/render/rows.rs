//! Row Models
//!
//! Pure data-to-row transformation, independent of any live view.

use crate::domain::{AssetRecord, AssetStore, Category};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub id: u64,
    pub name: String,
    pub qty: String,
    pub cond: String,
    pub category: Category,
}

impl AssetRow {
    fn from_record(category: Category, record: &AssetRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            qty: record.qty.clone(),
            cond: record.cond.clone(),
            category,
        }
    }
}

/// Rows of one category in storage order
pub fn category_rows(store: &AssetStore, category: Category) -> Vec<AssetRow> {
    store
        .records(category)
        .iter()
        .map(|r| AssetRow::from_record(category, r))
        .collect()
}

/// All categories combined, sorted by id ascending
pub fn combined_rows(store: &AssetStore) -> Vec<AssetRow> {
    let mut rows: Vec<AssetRow> = store.iter().map(|(c, r)| AssetRow::from_record(c, r)).collect();
    // stable: equal ids (hand-edited storage) keep category order
    rows.sort_by_key(|r| r.id);
    rows
}
