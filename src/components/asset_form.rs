//! Add Asset Form
//!
//! Category select plus name/qty/condition inputs. Submission is gated on the
//! session role; guests get a notice and nothing is stored.

use asset_core::controller::{submit_asset, AssetDraft, SubmitOutcome, ADMIN_ONLY_NOTICE};
use asset_core::Category;
use leptos::prelude::*;

use crate::browser::dialog;
use crate::context::AppContext;
use crate::store::{store_role, use_app_store};

#[component]
pub fn AssetForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (category, set_category) = signal(Category::Electronics.as_str().to_string());
    let (name, set_name) = signal(String::new());
    let (qty, set_qty) = signal(String::new());
    let (cond, set_cond) = signal(String::new());

    let reset = move || {
        set_category.set(Category::Electronics.as_str().to_string());
        set_name.set(String::new());
        set_qty.set(String::new());
        set_cond.set(String::new());
    };

    let add_asset = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = AssetDraft {
            category: category.get(),
            name: name.get(),
            qty: qty.get(),
            cond: cond.get(),
        };
        let inventory = match ctx.inventory() {
            Ok(inventory) => inventory,
            Err(e) => {
                log::error!("[FORM] Cannot add asset: {}", e);
                return;
            }
        };
        match submit_asset(&inventory, ctx.role(), &draft) {
            Ok(SubmitOutcome::Added(_)) => {
                reset();
                ctx.reload();
            }
            Ok(SubmitOutcome::Denied) => dialog::alert(ADMIN_ONLY_NOTICE),
            Ok(SubmitOutcome::Incomplete) => {}
            Err(e) => log::error!("[FORM] Failed to save asset: {}", e),
        }
    };

    view! {
        <form class="asset-form" on:submit=add_asset>
            <h2>"Add Asset"</h2>
            <div class="asset-form-row">
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {Category::ALL.into_iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Qty"
                    prop:value=move || qty.get()
                    on:input=move |ev| set_qty.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Condition"
                    prop:value=move || cond.get()
                    on:input=move |ev| set_cond.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <Show when=move || !store_role(&store).is_privileged()>
                <p class="role-hint">"Viewing as guest: adding and deleting require the admin role."</p>
            </Show>
        </form>
    }
}
