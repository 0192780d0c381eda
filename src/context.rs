//! Application Context
//!
//! Shared state provided via Leptos Context API.

use asset_core::repository::AssetRepository;
use asset_core::{Inventory, KeyValueStorage, Role, StorageResult, TrackerConfig, ViewMode};
use leptos::prelude::*;
use rolling_logger::RollingLogger;

use crate::browser::storage::BrowserStorage;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every mutation; readers re-load the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every mutation - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<TrackerConfig>,
    /// Installed logger, if `init` succeeded
    logger: Option<&'static RollingLogger>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: TrackerConfig,
        logger: Option<&'static RollingLogger>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            logger,
        }
    }

    /// Buffered log lines, oldest first
    pub fn recent_logs(&self) -> Vec<String> {
        self.logger.map(|l| l.recent()).unwrap_or_default()
    }

    /// Trigger a full re-render from persisted state
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn view_mode(&self) -> ViewMode {
        self.config.with_value(|c| c.view_mode)
    }

    pub fn main_page(&self) -> String {
        self.config.with_value(|c| c.main_page.clone())
    }

    /// Current role flag from session state, re-read on every call
    pub fn role(&self) -> Role {
        let (role_key, admin_role) = self.config.with_value(|c| (c.role_key.clone(), c.admin_role.clone()));
        let flag = BrowserStorage::session().and_then(|s| s.get(&role_key));
        match flag {
            Ok(flag) => Role::from_flag(flag.as_deref(), &admin_role),
            Err(e) => {
                log::warn!("[ROLE] {}, treating as guest", e);
                Role::Guest
            }
        }
    }

    /// Mutators over `localStorage`
    pub fn inventory(&self) -> StorageResult<Inventory<BrowserStorage>> {
        let keys = self.config.with_value(|c| c.storage_keys());
        Ok(Inventory::new(AssetRepository::new(BrowserStorage::local()?, keys)))
    }
}
