//! Asset Store
//!
//! Category -> ordered records. Insertion order within a category is the
//! display order. Ids are unique across the whole store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{AssetRecord, Category};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStore {
    #[serde(default, deserialize_with = "lenient_records")]
    pub electronics: Vec<AssetRecord>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub furniture: Vec<AssetRecord>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub stationery: Vec<AssetRecord>,
}

/// A non-array category reads as empty; non-object entries are dropped
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<AssetRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[STORE] Dropping unreadable record: {}", e);
                None
            }
        })
        .collect())
}

impl AssetStore {
    pub fn records(&self, category: Category) -> &[AssetRecord] {
        match category {
            Category::Electronics => &self.electronics,
            Category::Furniture => &self.furniture,
            Category::Stationery => &self.stationery,
        }
    }

    pub fn records_mut(&mut self, category: Category) -> &mut Vec<AssetRecord> {
        match category {
            Category::Electronics => &mut self.electronics,
            Category::Furniture => &mut self.furniture,
            Category::Stationery => &mut self.stationery,
        }
    }

    /// True when every category is empty
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.records(*c).is_empty())
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.records(*c).len()).sum()
    }

    /// Every record with its category, in category then storage order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &AssetRecord)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.records(c).iter().map(move |r| (c, r)))
    }

    pub fn max_id(&self) -> Option<u64> {
        self.iter().map(|(_, r)| r.id).max()
    }
}
