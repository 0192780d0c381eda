//! Asset Tracker Core
//!
//! Everything about the asset tracker that does not need a browser:
//! the data model, the storage accessor behind an injected key-value
//! storage, legacy-table seeding, table rendering, mutators, and the
//! decision logic behind the forms.

pub mod config;
pub mod controller;
pub mod domain;
pub mod indent;
pub mod inventory;
pub mod render;
pub mod repository;
pub mod seeder;

pub use config::TrackerConfig;
pub use domain::{AssetRecord, AssetStore, Category, NewAsset, Role, StorageError, StorageResult};
pub use inventory::Inventory;
pub use render::ViewMode;
pub use repository::{AssetRepository, KeyValueStorage, MemoryStorage, StorageKeys};
