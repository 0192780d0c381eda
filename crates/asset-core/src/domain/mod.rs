//! Domain Layer
//!
//! Asset records, the category-partitioned store, and the client-side role.
//! No storage or browser concerns live here.

mod asset;
mod category;
mod error;
mod role;
mod store;

pub use asset::{AssetRecord, NewAsset};
pub use category::Category;
pub use error::{ConfigError, StorageError, StorageResult};
pub use role::Role;
pub use store::AssetStore;
