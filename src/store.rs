//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use asset_core::{AssetStore, Role, ViewMode};
use leptos::prelude::*;
use reactive_stores::Store;

/// What the page currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last snapshot loaded from storage
    pub snapshot: AssetStore,
    /// Role flag as of the last reload
    pub role: Role,
    /// Page identity from config; fixed for the page's lifetime
    pub view_mode: ViewMode,
}

impl AppState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered snapshot
pub fn store_set_snapshot(store: &AppStore, snapshot: AssetStore) {
    store.snapshot().set(snapshot);
}

pub fn store_snapshot(store: &AppStore) -> AssetStore {
    store.snapshot().get()
}

pub fn store_set_role(store: &AppStore, role: Role) {
    store.role().set(role);
}

pub fn store_role(store: &AppStore) -> Role {
    store.role().get()
}

pub fn store_view_mode(store: &AppStore) -> ViewMode {
    store.view_mode().get_untracked()
}
