//! Asset Tracker App
//!
//! Root component: page guard, snapshot loading, and the page layout.

use asset_core::controller::{guard_page, PageAccess, ADMIN_PAGE_NOTICE};
use asset_core::{TrackerConfig, ViewMode};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::dialog;
use rolling_logger::RollingLogger;

use crate::components::{AssetForm, AssetTables, IndentFormView, LogPanel};
use crate::context::AppContext;
use crate::store::{store_set_role, store_set_snapshot, AppState};

#[component]
pub fn App(config: TrackerConfig, logger: Option<&'static RollingLogger>) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config, logger);
    let store = Store::new(AppState::new(ctx.view_mode()));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    let view_mode = ctx.view_mode();
    if guard_page(view_mode, ctx.role()) == PageAccess::Redirect {
        log::info!("[GUARD] Non-admin on admin page, redirecting");
        dialog::alert(ADMIN_PAGE_NOTICE);
        dialog::navigate(&ctx.main_page());
        return view! { <p class="notice">{ADMIN_PAGE_NOTICE}</p> }.into_any();
    }

    // Reload snapshot on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        store_set_role(&store, ctx.role());
        match ctx.inventory() {
            Ok(inventory) => {
                let snapshot = inventory.snapshot();
                log::debug!("[APP] Loaded {} assets, trigger={}", snapshot.len(), trigger);
                store_set_snapshot(&store, snapshot);
            }
            Err(e) => log::error!("[APP] Cannot load assets: {}", e),
        }
    });

    let title = match view_mode {
        ViewMode::Standard => "Asset Inventory",
        ViewMode::Admin => "Asset Inventory - Admin",
    };

    view! {
        <main class="app-layout">
            <h1>{title}</h1>

            <AssetForm />

            <AssetTables />

            <IndentFormView />

            <LogPanel />
        </main>
    }
    .into_any()
}

/// Shown instead of the app when the page config cannot be read
#[component]
pub fn ConfigErrorNotice(message: String) -> impl IntoView {
    view! {
        <main class="app-layout">
            <h1>"Asset Inventory"</h1>
            <p class="notice">"This page is misconfigured: " {message}</p>
        </main>
    }
}
