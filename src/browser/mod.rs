//! Browser Bindings
//!
//! Thin wrappers over the host page: storage, legacy tables, dialogs,
//! console, page-supplied config.

pub mod console;
pub mod dialog;
pub mod legacy;
pub mod page;
pub mod storage;
