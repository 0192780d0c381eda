//! Asset Record
//!
//! A single tracked asset. The category is not a field: it is the key of the
//! sequence the record lives in.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decoding is lenient per field: a missing, `null` or oddly typed value
/// becomes empty text (or id 0) instead of failing the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Free-form quantity label ("4", "2 boxes", ...)
    #[serde(default, deserialize_with = "lenient_text")]
    pub qty: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cond: String,
}

impl AssetRecord {
    pub fn new(id: u64, asset: NewAsset) -> Self {
        Self {
            id,
            name: asset.name,
            qty: asset.qty,
            cond: asset.cond,
        }
    }
}

/// Fields of an asset before an id is minted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub qty: String,
    pub cond: String,
}

impl NewAsset {
    pub fn new(name: impl Into<String>, qty: impl Into<String>, cond: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty: qty.into(),
            cond: cond.into(),
        }
    }
}

/// Strings pass through; numbers and booleans become their text; anything else is empty
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Non-negative integers, or digit strings; anything else is 0
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
