//! Form Controllers
//!
//! What happens when the asset form is submitted, a delete control is
//! clicked, or a restricted page is opened. The role check here is advisory
//! UI gating only; the mutation path itself is not protected.

use crate::domain::{AssetRecord, Category, NewAsset, Role, StorageResult};
use crate::inventory::Inventory;
use crate::render::{DeleteTarget, ViewMode};
use crate::repository::KeyValueStorage;

/// Shown when a non-admin tries to add or delete
pub const ADMIN_ONLY_NOTICE: &str = "Only admins can add or delete assets.";

/// Shown before a non-admin is sent away from the admin page
pub const ADMIN_PAGE_NOTICE: &str = "Admin access required. Returning to the main page.";

/// Raw values of the add-asset form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub category: String,
    pub name: String,
    pub qty: String,
    pub cond: String,
}

impl AssetDraft {
    /// All fields present and the category known
    pub fn validate(&self) -> Option<(Category, NewAsset)> {
        let name = self.name.trim();
        let qty = self.qty.trim();
        let cond = self.cond.trim();
        if name.is_empty() || qty.is_empty() || cond.is_empty() {
            return None;
        }
        let category = Category::parse(&self.category)?;
        Some((category, NewAsset::new(name, qty, cond)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not the privileged role; show `ADMIN_ONLY_NOTICE`
    Denied,
    /// Missing fields; blocked silently
    Incomplete,
    /// Record stored; reset the form
    Added(AssetRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Denied,
    Cancelled,
    Deleted,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Allowed,
    Redirect,
}

pub fn submit_asset<S: KeyValueStorage>(
    inventory: &Inventory<S>,
    role: Role,
    draft: &AssetDraft,
) -> StorageResult<SubmitOutcome> {
    if !role.is_privileged() {
        log::info!("[FORM] Add denied for {:?}", role);
        return Ok(SubmitOutcome::Denied);
    }
    let Some((category, asset)) = draft.validate() else {
        return Ok(SubmitOutcome::Incomplete);
    };
    inventory.add_asset(category, asset).map(SubmitOutcome::Added)
}

/// Delete after the role check and an explicit confirmation.
///
/// `confirm` is only asked for privileged roles.
pub fn request_delete<S, F>(
    inventory: &Inventory<S>,
    role: Role,
    target: DeleteTarget,
    confirm: F,
) -> StorageResult<DeleteOutcome>
where
    S: KeyValueStorage,
    F: FnOnce(&DeleteTarget) -> bool,
{
    if !role.is_privileged() {
        log::info!("[FORM] Delete of #{} denied for {:?}", target.id, role);
        return Ok(DeleteOutcome::Denied);
    }
    if !confirm(&target) {
        return Ok(DeleteOutcome::Cancelled);
    }
    Ok(if inventory.delete_asset(target.category, target.id)? {
        DeleteOutcome::Deleted
    } else {
        DeleteOutcome::Missing
    })
}

pub fn guard_page(mode: ViewMode, role: Role) -> PageAccess {
    match (mode, role.is_privileged()) {
        (ViewMode::Admin, false) => PageAccess::Redirect,
        _ => PageAccess::Allowed,
    }
}
