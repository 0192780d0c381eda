//! Repository Layer
//!
//! Storage abstraction and the accessor for the asset store and id counter.

mod asset_repo;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use asset_repo::{AssetRepository, StorageKeys};
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
