//! Checklist Store
//!
//! All checklist data for every type, and the mutations that keep each
//! type's category order and item lists in lock-step. Every mutation
//! reports whether anything changed so callers know when to persist.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ChecklistData, ChecklistType, Item};

/// One `ChecklistData` per checklist type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checklists(BTreeMap<ChecklistType, ChecklistData>);

impl Default for Checklists {
    fn default() -> Self {
        Self(
            ChecklistType::ALL
                .into_iter()
                .map(|kind| (kind, ChecklistData::defaults_for(kind)))
                .collect(),
        )
    }
}

impl Checklists {
    /// Deserialize a stored blob and restore the lock-step invariant
    ///
    /// Entries are restored one by one: an unknown type label or an entry
    /// that is not checklist data is skipped with a warning instead of
    /// discarding the whole blob. Only a blob that is not a JSON object
    /// is an error.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut restored = BTreeMap::new();
        for (label, value) in entries {
            let Some(kind) = ChecklistType::parse(&label) else {
                log::warn!("[STORE] Skipping unknown checklist type '{}'", label);
                continue;
            };
            match serde_json::from_value::<ChecklistData>(value) {
                Ok(data) => {
                    restored.insert(kind, data);
                }
                Err(e) => log::warn!("[STORE] {}: unreadable entry, using defaults: {}", kind, e),
            }
        }

        let mut checklists = Checklists(restored);
        checklists.normalize();
        Ok(checklists)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Repair a restored store without dropping any items
    ///
    /// Missing types get their default categories, categories without a
    /// list get an empty one, orphan lists are appended to the category
    /// order, and repeated category names keep their first position.
    pub fn normalize(&mut self) {
        for kind in ChecklistType::ALL {
            let data = self
                .0
                .entry(kind)
                .or_insert_with(|| ChecklistData::defaults_for(kind));

            let mut seen = Vec::with_capacity(data.categories.len());
            for name in data.categories.drain(..) {
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
            for name in data.items.keys() {
                if !seen.contains(name) {
                    log::warn!("[STORE] {}: adopting orphan category '{}'", kind, name);
                    seen.push(name.clone());
                }
            }
            for name in &seen {
                data.items.entry(name.clone()).or_default();
            }
            data.categories = seen;
        }
    }

    pub fn get(&self, kind: ChecklistType) -> &ChecklistData {
        // `Default` and `normalize` guarantee every type is present
        &self.0[&kind]
    }

    fn data_mut(&mut self, kind: ChecklistType) -> &mut ChecklistData {
        self.0
            .entry(kind)
            .or_insert_with(|| ChecklistData::defaults_for(kind))
    }

    fn item_mut(&mut self, kind: ChecklistType, category: &str, index: usize) -> Option<&mut Item> {
        self.data_mut(kind).items.get_mut(category)?.get_mut(index)
    }

    /// Append a trimmed, unchecked item. Blank text is ignored.
    pub fn add_item(&mut self, kind: ChecklistType, category: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.data_mut(kind).items.get_mut(category) {
            Some(list) => {
                list.push(Item::new(text));
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index`, shifting later items down
    pub fn remove_item(&mut self, kind: ChecklistType, category: &str, index: usize) -> bool {
        match self.data_mut(kind).items.get_mut(category) {
            Some(list) if index < list.len() => {
                list.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_item(&mut self, kind: ChecklistType, category: &str, index: usize) -> bool {
        match self.item_mut(kind, category, index) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Replace the item text as given, empty text included
    pub fn edit_item(&mut self, kind: ChecklistType, category: &str, index: usize, text: &str) -> bool {
        match self.item_mut(kind, category, index) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Append a category with an empty item list
    ///
    /// Returns the stored (trimmed) name, or `None` when the name is blank
    /// or already taken.
    pub fn add_category(&mut self, kind: ChecklistType, name: &str) -> Option<String> {
        let name = name.trim();
        let data = self.data_mut(kind);
        if name.is_empty() || data.has_category(name) {
            return None;
        }
        data.categories.push(name.to_string());
        data.items.insert(name.to_string(), Vec::new());
        Some(name.to_string())
    }

    /// Rename a category in place, moving its items to the new key
    ///
    /// Returns the stored (trimmed) new name, or `None` for a no-op.
    pub fn rename_category(&mut self, kind: ChecklistType, old: &str, new: &str) -> Option<String> {
        let new = new.trim();
        let data = self.data_mut(kind);
        if new.is_empty() || new == old || data.has_category(new) {
            return None;
        }
        let position = data.categories.iter().position(|c| c == old)?;
        data.categories[position] = new.to_string();
        let items = data.items.remove(old).unwrap_or_default();
        data.items.insert(new.to_string(), items);
        Some(new.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP: ChecklistType = ChecklistType::Shopping;

    fn padaria(store: &Checklists) -> &[Item] {
        store.get(SHOP).items_in("Padaria")
    }

    #[test]
    fn test_defaults_cover_every_type() {
        let store = Checklists::default();
        for kind in ChecklistType::ALL {
            assert_eq!(store.get(kind), &ChecklistData::defaults_for(kind));
        }
    }

    #[test]
    fn test_add_item_trims_and_unchecks() {
        let mut store = Checklists::default();
        assert!(store.add_item(SHOP, "Padaria", "  Pão  "));

        assert_eq!(padaria(&store), &[Item::new("Pão")]);
    }

    #[test]
    fn test_add_blank_item_is_ignored() {
        let mut store = Checklists::default();
        assert!(!store.add_item(SHOP, "Padaria", ""));
        assert!(!store.add_item(SHOP, "Padaria", "   "));
        assert!(padaria(&store).is_empty());
    }

    #[test]
    fn test_add_item_to_unknown_category_is_ignored() {
        let mut store = Checklists::default();
        assert!(!store.add_item(SHOP, "Nope", "Milk"));
        assert!(!store.get(SHOP).items.contains_key("Nope"));
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");

        assert!(store.toggle_item(SHOP, "Padaria", 0));
        assert!(padaria(&store)[0].checked);
        assert!(store.toggle_item(SHOP, "Padaria", 0));
        assert!(!padaria(&store)[0].checked);
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut store = Checklists::default();
        for text in ["a", "b", "c"] {
            store.add_item(SHOP, "Padaria", text);
        }

        assert!(store.remove_item(SHOP, "Padaria", 1));

        let texts: Vec<_> = padaria(&store).iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "a");
        let before = store.clone();

        assert!(!store.remove_item(SHOP, "Padaria", 5));
        assert!(!store.toggle_item(SHOP, "Padaria", 1));
        assert!(!store.edit_item(SHOP, "Padaria", 1, "x"));
        assert!(!store.toggle_item(SHOP, "Nope", 0));
        assert_eq!(store, before);
    }

    #[test]
    fn test_edit_keeps_text_verbatim() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");

        assert!(store.edit_item(SHOP, "Padaria", 0, "  Oat milk "));
        assert_eq!(padaria(&store)[0].text, "  Oat milk ");

        assert!(store.edit_item(SHOP, "Padaria", 0, ""));
        assert_eq!(padaria(&store)[0].text, "");
    }

    #[test]
    fn test_add_category() {
        let mut store = Checklists::default();
        assert_eq!(store.add_category(SHOP, " Bebidas "), Some("Bebidas".to_string()));

        let data = store.get(SHOP);
        assert_eq!(data.categories.last().map(String::as_str), Some("Bebidas"));
        assert!(data.items["Bebidas"].is_empty());
    }

    #[test]
    fn test_add_category_rejects_blank_and_duplicate() {
        let mut store = Checklists::default();
        let before = store.clone();

        assert_eq!(store.add_category(SHOP, "  "), None);
        assert_eq!(store.add_category(SHOP, "Padaria"), None);
        assert_eq!(store, before);

        // Case-sensitive
        assert!(store.add_category(SHOP, "padaria").is_some());
    }

    #[test]
    fn test_rename_moves_items_in_place() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");
        store.add_item(SHOP, "Carnes", "Beef");

        assert_eq!(store.rename_category(SHOP, "Padaria", "Bakery"), Some("Bakery".to_string()));

        let data = store.get(SHOP);
        assert_eq!(data.categories[1], "Bakery");
        assert_eq!(data.items["Bakery"], vec![Item::new("Milk")]);
        assert!(!data.items.contains_key("Padaria"));
        assert_eq!(data.items["Carnes"], vec![Item::new("Beef")]);
        assert_eq!(data.items.len(), data.categories.len());
    }

    #[test]
    fn test_rename_noops() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");
        let before = store.clone();

        assert_eq!(store.rename_category(SHOP, "Padaria", "Padaria"), None);
        assert_eq!(store.rename_category(SHOP, "Padaria", ""), None);
        assert_eq!(store.rename_category(SHOP, "Padaria", "   "), None);
        assert_eq!(store.rename_category(SHOP, "Padaria", "Carnes"), None);
        assert_eq!(store.rename_category(SHOP, "Nope", "Other"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");
        store.toggle_item(SHOP, "Padaria", 0);
        store.add_category(ChecklistType::Travel, "Mapas");
        store.add_item(ChecklistType::Travel, "Mapas", "Lisboa");
        store.rename_category(ChecklistType::Work, "Reuniões", "Calls");
        store.add_item(ChecklistType::Free, "Tarefas", "x");
        store.edit_item(ChecklistType::Free, "Tarefas", 0, "");
        store.remove_item(ChecklistType::Free, "Tarefas", 0);

        let json = store.to_json().unwrap();
        assert_eq!(Checklists::from_json(&json).unwrap(), store);
    }

    #[test]
    fn test_milk_scenario() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");
        store.toggle_item(SHOP, "Padaria", 0);

        let restored = Checklists::from_json(&store.to_json().unwrap()).unwrap();
        let data = restored.get(SHOP);
        assert_eq!(
            data.categories,
            ["Bruto", "Padaria", "Carnes", "Produto de Limpeza", "Hortifrut", "Utilidades"]
        );
        assert_eq!(data.items["Padaria"], vec![Item { text: "Milk".to_string(), checked: true }]);
        assert_eq!(data.item_count(), 1);
    }

    #[test]
    fn test_wire_format_uses_labels() {
        let json = Checklists::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["Compras"]["categorias"].is_array());
        assert!(value["Livre"]["items"]["Tarefas"].is_array());
    }

    #[test]
    fn test_normalize_fills_missing_types() {
        let json = r#"{"Livre":{"categorias":["Tarefas"],"items":{"Tarefas":[{"text":"a","checked":true}]}}}"#;
        let store = Checklists::from_json(json).unwrap();

        assert_eq!(store.get(ChecklistType::Free).items_in("Tarefas").len(), 1);
        assert_eq!(store.get(SHOP), &ChecklistData::defaults_for(SHOP));
    }

    #[test]
    fn test_normalize_restores_lockstep() {
        let json = r#"{"Livre":{"categorias":["A","A","B"],"items":{"A":[],"C":[{"text":"c","checked":false}]}}}"#;
        let store = Checklists::from_json(json).unwrap();
        let data = store.get(ChecklistType::Free);

        assert_eq!(data.categories, ["A", "B", "C"]);
        assert!(data.items["B"].is_empty());
        assert_eq!(data.items["C"], vec![Item::new("c")]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Checklists::from_json("not json").is_err());
        assert!(Checklists::from_json("[]").is_err());
    }

    #[test]
    fn test_unknown_type_key_keeps_other_entries() {
        let mut store = Checklists::default();
        store.add_item(SHOP, "Padaria", "Milk");
        let mut value: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        value["Festa"] = serde_json::json!({"categorias": ["Bebidas"], "items": {"Bebidas": []}});

        let restored = Checklists::from_json(&value.to_string()).unwrap();

        assert_eq!(restored, store);
        assert_eq!(padaria(&restored), &[Item::new("Milk")]);
    }

    #[test]
    fn test_unreadable_entry_falls_back_for_that_type_only() {
        let json = r#"{"Compras": 3, "Livre": {"categorias": ["Tarefas"], "items": {"Tarefas": [{"text": "a", "checked": false}]}}}"#;
        let store = Checklists::from_json(json).unwrap();

        assert_eq!(store.get(SHOP), &ChecklistData::defaults_for(SHOP));
        assert_eq!(store.get(ChecklistType::Free).items_in("Tarefas"), &[Item::new("a")]);
    }

    #[test]
    fn test_entry_without_categories_keeps_items() {
        let json = r#"{"Compras": {"items": {"Padaria": [{"text": "Milk", "checked": true}]}}}"#;
        let store = Checklists::from_json(json).unwrap();
        let data = store.get(SHOP);

        assert_eq!(data.categories, ["Padaria"]);
        assert!(data.items_in("Padaria")[0].checked);
    }
}
