//! App Configuration
//!
//! Storage keys and startup defaults. An optional JSON override can be
//! stored under [`CONFIG_KEY`]; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::models::ChecklistType;
use crate::storage::KeyValueStorage;

/// Storage key holding an optional config override
pub const CONFIG_KEY: &str = "checklist-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key of the serialized checklist store
    pub store_key: String,
    /// Key of the active checklist type label
    pub active_type_key: String,
    /// Type selected when nothing valid is stored
    pub fallback_type: ChecklistType,
    /// Question asked before removing an item
    pub remove_prompt: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_key: "multi-checklists".to_string(),
            active_type_key: "tipoChecklistAtual".to_string(),
            fallback_type: ChecklistType::Shopping,
            remove_prompt: "Tem certeza que deseja remover este item?".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load the override from storage, falling back to defaults
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> Self {
        match storage.get(CONFIG_KEY) {
            Ok(Some(json)) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring invalid override: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(&MemoryStorage::new());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store_key, "multi-checklists");
        assert_eq!(config.active_type_key, "tipoChecklistAtual");
    }

    #[test]
    fn test_partial_override() {
        let storage = MemoryStorage::with_value(CONFIG_KEY, r#"{"fallback_type":"Livre","log_level":"debug"}"#);
        let config = AppConfig::load(&storage);

        assert_eq!(config.fallback_type, ChecklistType::Free);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.store_key, "multi-checklists");
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let storage = MemoryStorage::with_value(CONFIG_KEY, "{");
        assert_eq!(AppConfig::load(&storage), AppConfig::default());
    }

    #[test]
    fn test_bad_level_defaults_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
