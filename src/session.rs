//! Checklist Session
//!
//! The store plus the transient state around it: the active type, the
//! pending "new item" text per category, open edit sessions and the edit
//! mode flag. Every successful mutation persists the whole store before
//! returning; no-ops write nothing.

use std::collections::HashMap;

use reactive_stores::Store;

use crate::checklists::Checklists;
use crate::config::AppConfig;
use crate::confirm::Confirm;
use crate::models::{ChecklistData, ChecklistType};
use crate::storage::{KeyValueStorage, StorageError, StorageResult};

/// Item whose text is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEdit {
    pub category: String,
    pub index: usize,
    pub text: String,
}

/// Category whose name is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEdit {
    pub original: String,
    pub text: String,
}

#[derive(Debug, Clone, Store)]
pub struct ChecklistSession {
    config: AppConfig,
    checklists: Checklists,
    active: ChecklistType,
    drafts: HashMap<String, String>,
    new_category: String,
    item_edit: Option<ItemEdit>,
    category_edit: Option<CategoryEdit>,
    /// Shows add/edit/remove controls
    pub edit_mode: bool,
}

impl ChecklistSession {
    /// Restore the session from storage
    ///
    /// A missing or unreadable store blob starts from the default
    /// categories. Edit mode starts on when the active checklist is empty.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S, config: AppConfig) -> Self {
        let checklists = match storage.get(&config.store_key) {
            Ok(Some(json)) => Checklists::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[SESSION] Stored checklists unreadable, using defaults: {}", e);
                Checklists::default()
            }),
            Ok(None) => {
                log::info!("[SESSION] No stored checklists, seeding defaults");
                Checklists::default()
            }
            Err(e) => {
                log::error!("[SESSION] {}", e);
                Checklists::default()
            }
        };

        let active = match storage.get(&config.active_type_key) {
            Ok(Some(label)) => ChecklistType::parse(&label).unwrap_or(config.fallback_type),
            Ok(None) => config.fallback_type,
            Err(e) => {
                log::error!("[SESSION] {}", e);
                config.fallback_type
            }
        };

        let mut session = Self {
            config,
            checklists,
            active,
            drafts: HashMap::new(),
            new_category: String::new(),
            item_edit: None,
            category_edit: None,
            edit_mode: false,
        };
        session.edit_mode = session.current().is_empty();
        session.reset_drafts();
        log::info!(
            "[SESSION] Loaded '{}' with {} items, edit mode {}",
            session.active,
            session.current().item_count(),
            session.edit_mode
        );
        session
    }

    pub fn active(&self) -> ChecklistType {
        self.active
    }

    pub fn checklists(&self) -> &Checklists {
        &self.checklists
    }

    /// Data of the active type
    pub fn current(&self) -> &ChecklistData {
        self.checklists.get(self.active)
    }

    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
    }

    fn reset_drafts(&mut self) {
        self.drafts = self
            .current()
            .categories
            .iter()
            .map(|c| (c.clone(), String::new()))
            .collect();
    }

    fn save<S: KeyValueStorage + ?Sized>(&self, storage: &S) -> StorageResult<()> {
        let json = self
            .checklists
            .to_json()
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        storage.set(&self.config.store_key, &json)?;
        log::debug!("[SESSION] Saved {} bytes", json.len());
        Ok(())
    }

    fn save_if<S: KeyValueStorage + ?Sized>(&self, storage: &S, changed: bool) -> StorageResult<bool> {
        if changed {
            self.save(storage)?;
        }
        Ok(changed)
    }

    // ========================
    // Checklist Type
    // ========================

    /// Switch the active type and remember the choice
    pub fn select_type<S: KeyValueStorage + ?Sized>(&mut self, storage: &S, kind: ChecklistType) -> StorageResult<()> {
        self.active = kind;
        self.item_edit = None;
        self.category_edit = None;
        self.reset_drafts();
        storage.set(&self.config.active_type_key, kind.as_str())?;
        log::debug!("[SESSION] Selected '{}'", kind);
        Ok(())
    }

    // ========================
    // Items
    // ========================

    pub fn draft(&self, category: &str) -> &str {
        self.drafts.get(category).map(String::as_str).unwrap_or("")
    }

    pub fn set_draft(&mut self, category: &str, text: impl Into<String>) {
        self.drafts.insert(category.to_string(), text.into());
    }

    /// Add an item from `text`; clears the category's draft on success
    pub fn add_item<S: KeyValueStorage + ?Sized>(
        &mut self,
        storage: &S,
        category: &str,
        text: &str,
    ) -> StorageResult<bool> {
        let changed = self.checklists.add_item(self.active, category, text);
        if changed {
            self.drafts.insert(category.to_string(), String::new());
        }
        self.save_if(storage, changed)
    }

    /// Add an item from the category's draft buffer
    pub fn add_draft_item<S: KeyValueStorage + ?Sized>(&mut self, storage: &S, category: &str) -> StorageResult<bool> {
        let text = self.draft(category).to_string();
        self.add_item(storage, category, &text)
    }

    /// Remove an item once the user confirms
    pub fn remove_item<S, C>(&mut self, storage: &S, confirm: &C, category: &str, index: usize) -> StorageResult<bool>
    where
        S: KeyValueStorage + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(&self.config.remove_prompt) {
            return Ok(false);
        }
        let changed = self.checklists.remove_item(self.active, category, index);
        if changed {
            self.shift_item_edit(category, index);
        }
        self.save_if(storage, changed)
    }

    fn shift_item_edit(&mut self, category: &str, removed: usize) {
        let Some(edit) = self.item_edit.as_mut() else {
            return;
        };
        if edit.category != category {
            return;
        }
        if edit.index == removed {
            self.item_edit = None;
        } else if edit.index > removed {
            edit.index -= 1;
        }
    }

    pub fn toggle_item<S: KeyValueStorage + ?Sized>(&mut self, storage: &S, category: &str, index: usize) -> StorageResult<bool> {
        let changed = self.checklists.toggle_item(self.active, category, index);
        self.save_if(storage, changed)
    }

    /// Replace an item's text as given, without trimming
    pub fn edit_item<S: KeyValueStorage + ?Sized>(
        &mut self,
        storage: &S,
        category: &str,
        index: usize,
        text: &str,
    ) -> StorageResult<bool> {
        let changed = self.checklists.edit_item(self.active, category, index, text);
        self.save_if(storage, changed)
    }

    /// Open an edit session seeded with the item's current text
    pub fn start_item_edit(&mut self, category: &str, index: usize) {
        self.item_edit = self
            .current()
            .items_in(category)
            .get(index)
            .map(|item| ItemEdit {
                category: category.to_string(),
                index,
                text: item.text.clone(),
            });
    }

    pub fn item_edit(&self) -> Option<&ItemEdit> {
        self.item_edit.as_ref()
    }

    pub fn is_editing_item(&self, category: &str, index: usize) -> bool {
        matches!(&self.item_edit, Some(e) if e.category == category && e.index == index)
    }

    pub fn set_item_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.item_edit.as_mut() {
            edit.text = text.into();
        }
    }

    /// Apply and close the open item edit session
    pub fn commit_item_edit<S: KeyValueStorage + ?Sized>(&mut self, storage: &S) -> StorageResult<bool> {
        match self.item_edit.take() {
            Some(edit) => self.edit_item(storage, &edit.category, edit.index, &edit.text),
            None => Ok(false),
        }
    }

    // ========================
    // Categories
    // ========================

    pub fn new_category_draft(&self) -> &str {
        &self.new_category
    }

    pub fn set_new_category_draft(&mut self, text: impl Into<String>) {
        self.new_category = text.into();
    }

    pub fn add_category<S: KeyValueStorage + ?Sized>(&mut self, storage: &S, name: &str) -> StorageResult<bool> {
        match self.checklists.add_category(self.active, name) {
            Some(added) => {
                self.drafts.insert(added, String::new());
                self.save(storage)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Add a category from the new-category buffer, clearing it on success
    pub fn commit_new_category<S: KeyValueStorage + ?Sized>(&mut self, storage: &S) -> StorageResult<bool> {
        let name = std::mem::take(&mut self.new_category);
        let added = self.add_category(storage, &name);
        // A failed save still added the category in memory
        if matches!(added, Ok(false)) {
            self.new_category = name;
        }
        added
    }

    /// Rename a category, carrying its items and draft to the new name
    pub fn rename_category<S: KeyValueStorage + ?Sized>(&mut self, storage: &S, old: &str, new: &str) -> StorageResult<bool> {
        let Some(renamed) = self.checklists.rename_category(self.active, old, new) else {
            return Ok(false);
        };
        let draft = self.drafts.remove(old).unwrap_or_default();
        self.drafts.insert(renamed.clone(), draft);
        if let Some(edit) = self.item_edit.as_mut().filter(|e| e.category == old) {
            edit.category = renamed;
        }
        self.save(storage)?;
        Ok(true)
    }

    /// Open a rename session seeded with the current name
    pub fn start_category_edit(&mut self, name: &str) {
        self.category_edit = self.current().has_category(name).then(|| CategoryEdit {
            original: name.to_string(),
            text: name.to_string(),
        });
    }

    pub fn category_edit(&self) -> Option<&CategoryEdit> {
        self.category_edit.as_ref()
    }

    pub fn is_editing_category(&self, name: &str) -> bool {
        matches!(&self.category_edit, Some(e) if e.original == name)
    }

    pub fn set_category_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.category_edit.as_mut() {
            edit.text = text.into();
        }
    }

    /// Apply and close the open rename session
    pub fn commit_category_edit<S: KeyValueStorage + ?Sized>(&mut self, storage: &S) -> StorageResult<bool> {
        match self.category_edit.take() {
            Some(edit) => self.rename_category(storage, &edit.original, &edit.text),
            None => Ok(false),
        }
    }
}
