//! Asset Tables
//!
//! One table per category, plus the combined table on the admin page. Table
//! bodies are fully rebuilt from the current snapshot; delete controls are
//! handled by a single delegated click listener on the section.

use asset_core::controller::{request_delete, DeleteOutcome, ADMIN_ONLY_NOTICE};
use asset_core::render::{render_view, DeleteTarget, RenderedView, DELETE_ACTION};
use asset_core::{Category, ViewMode};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser::dialog;
use crate::browser::legacy::table_id;
use crate::context::AppContext;
use crate::store::{store_snapshot, store_view_mode, use_app_store};

#[component]
pub fn AssetTables() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let view_mode = store_view_mode(&store);

    let rendered = Memo::new(move |_| render_view(&store_snapshot(&store), view_mode));

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = delete_target_of(&ev) else {
            return;
        };
        let inventory = match ctx.inventory() {
            Ok(inventory) => inventory,
            Err(e) => {
                log::error!("[TABLE] Cannot delete asset: {}", e);
                return;
            }
        };
        let confirm = |t: &DeleteTarget| {
            dialog::confirm(&format!("Delete asset #{} from {}?", t.id, t.category.label()))
        };
        match request_delete(&inventory, ctx.role(), target, confirm) {
            Ok(DeleteOutcome::Deleted) | Ok(DeleteOutcome::Missing) => ctx.reload(),
            Ok(DeleteOutcome::Denied) => dialog::alert(ADMIN_ONLY_NOTICE),
            Ok(DeleteOutcome::Cancelled) => {}
            Err(e) => log::error!("[TABLE] Failed to delete #{}: {}", target.id, e),
        }
    };

    view! {
        <section class="asset-tables" on:click=on_click>
            {Category::ALL.into_iter().map(|category| view! {
                <div class="asset-table-block">
                    <h2>{category.label()}</h2>
                    <table
                        id=table_id(category)
                        class="asset-table"
                        inner_html=move || rendered.with(|r| category_markup(r, category))
                    ></table>
                </div>
            }).collect_view()}

            {(view_mode == ViewMode::Admin).then(|| view! {
                <div class="asset-table-block">
                    <h2>"All Assets"</h2>
                    <table
                        id="all-assets-table"
                        class="asset-table"
                        inner_html=move || rendered.with(|r| r.combined.clone().unwrap_or_default())
                    ></table>
                </div>
            })}
        </section>
    }
}

fn category_markup(rendered: &RenderedView, category: Category) -> String {
    rendered
        .tables
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, html)| html.clone())
        .unwrap_or_default()
}

/// The delete control the click landed in, if any
fn delete_target_of(ev: &web_sys::MouseEvent) -> Option<DeleteTarget> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = element
        .closest(&format!("[data-action=\"{}\"]", DELETE_ACTION))
        .ok()
        .flatten()?;
    DeleteTarget::from_attrs(
        control.get_attribute("data-category").as_deref(),
        control.get_attribute("data-id").as_deref(),
    )
}
