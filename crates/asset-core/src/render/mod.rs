//! Renderer
//!
//! Turns a store snapshot into row models and table markup. Rendering is a
//! full rebuild every time; nothing is patched incrementally.

mod escape;
mod markup;
mod rows;

use serde::{Deserialize, Serialize};

use crate::domain::{AssetStore, Category};

pub use escape::escape_html;
pub use markup::{category_table_markup, combined_table_markup, DeleteTarget, DELETE_ACTION};
pub use rows::{category_rows, combined_rows, AssetRow};

/// Which page the tables are rendered into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Standard,
    /// Restricted page with the combined table
    Admin,
}

/// Markup for every table on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub tables: Vec<(Category, String)>,
    pub combined: Option<String>,
}

pub fn render_view(store: &AssetStore, mode: ViewMode) -> RenderedView {
    RenderedView {
        tables: Category::ALL
            .into_iter()
            .map(|c| (c, category_table_markup(store, c)))
            .collect(),
        combined: match mode {
            ViewMode::Admin => Some(combined_table_markup(store)),
            ViewMode::Standard => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetRecord, NewAsset};

    #[test]
    fn test_combined_only_in_admin_mode() {
        let mut store = AssetStore::default();
        store.furniture.push(AssetRecord::new(1, NewAsset::new("Desk", "1", "Fair")));

        let standard = render_view(&store, ViewMode::Standard);
        assert_eq!(standard.tables.len(), 3);
        assert!(standard.combined.is_none());

        let admin = render_view(&store, ViewMode::Admin);
        assert!(admin.combined.unwrap().contains("<td>furniture</td>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut store = AssetStore::default();
        store.electronics.push(AssetRecord::new(7, NewAsset::new("Router", "2", "Used")));
        assert_eq!(render_view(&store, ViewMode::Admin), render_view(&store, ViewMode::Admin));
    }
}
