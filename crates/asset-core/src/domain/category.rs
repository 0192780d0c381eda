//! Asset Category
//!
//! The three fixed partitions of the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category determines which table a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Furniture,
    Stationery,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Furniture, Category::Stationery];

    /// Storage key, also used to tag delete controls
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Stationery => "stationery",
        }
    }

    /// Table heading
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Stationery => "Stationery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
