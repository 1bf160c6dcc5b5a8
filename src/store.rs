//! Global Application State Store
//!
//! Wraps the checklist session in a `reactive_stores::Store` and exposes
//! the mutation handlers used by components. Handlers persist to browser
//! local storage and log storage failures; the in-memory change is kept.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::confirm::BrowserConfirm;
use crate::models::ChecklistType;
use crate::session::ChecklistSession;
use crate::storage::{LocalStorage, StorageResult};

/// Type alias for the store
pub type AppStore = Store<ChecklistSession>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run a persisting session operation against local storage
fn store_apply<T>(
    store: &AppStore,
    action: &str,
    op: impl FnOnce(&mut ChecklistSession, &LocalStorage) -> StorageResult<T>,
) {
    store.update(|session| {
        if let Err(e) = op(session, &LocalStorage) {
            log::error!("[STORE] {} failed: {}", action, e);
        }
    });
}

// ========================
// Store Helper Functions
// ========================

pub fn store_select_type(store: &AppStore, kind: ChecklistType) {
    store_apply(store, "select type", |s, storage| s.select_type(storage, kind));
}

/// Add an item from the category's draft buffer
pub fn store_add_item(store: &AppStore, category: &str) {
    store_apply(store, "add item", |s, storage| s.add_draft_item(storage, category));
}

/// Remove an item after a `window.confirm()` prompt
pub fn store_remove_item(store: &AppStore, category: &str, index: usize) {
    store_apply(store, "remove item", |s, storage| {
        s.remove_item(storage, &BrowserConfirm, category, index)
    });
}

pub fn store_toggle_item(store: &AppStore, category: &str, index: usize) {
    store_apply(store, "toggle item", |s, storage| s.toggle_item(storage, category, index));
}

pub fn store_commit_item_edit(store: &AppStore) {
    store_apply(store, "edit item", |s, storage| s.commit_item_edit(storage));
}

pub fn store_commit_new_category(store: &AppStore) {
    store_apply(store, "add category", |s, storage| s.commit_new_category(storage));
}

pub fn store_commit_category_edit(store: &AppStore) {
    store_apply(store, "rename category", |s, storage| s.commit_category_edit(storage));
}
