//! Legacy Tables
//!
//! Rows pre-rendered into the host page before the store existed. They are
//! read once, handed to the seeder, and removed so the app can render its
//! own tables under the same ids.

use asset_core::seeder::{seed, LegacyTable, SeedOutcome};
use asset_core::{AssetRepository, Category, TrackerConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::storage::BrowserStorage;

/// Element id of a category's table
pub fn table_id(category: Category) -> String {
    format!("{}-table", category.as_str())
}

/// Read and detach every legacy table present in the page
pub fn take_legacy_tables(document: &Document) -> Vec<LegacyTable> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let table = document.get_element_by_id(&table_id(category))?;
            let rows = read_rows(&table);
            table.remove();
            Some(LegacyTable { category, rows })
        })
        .collect()
}

fn read_rows(table: &Element) -> Vec<Vec<String>> {
    let Ok(rows) = table.query_selector_all("tr") else {
        return Vec::new();
    };
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|row| {
            let cells = row.children();
            (0..cells.length())
                .filter_map(|j| cells.item(j))
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Seed the store from the page, once, before the app mounts
pub fn seed_from_page(config: &TrackerConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let tables = take_legacy_tables(&document);

    let storage = match BrowserStorage::local() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("[SEED] Skipped: {}", e);
            return;
        }
    };
    let repo = AssetRepository::new(storage, config.storage_keys());
    match seed(&repo, &tables) {
        Ok(SeedOutcome::Skipped) => log::debug!("[SEED] Store already populated"),
        Ok(SeedOutcome::Seeded { .. }) => {}
        Err(e) => log::error!("[SEED] Failed to write seeded store: {}", e),
    }
}
