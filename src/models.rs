//! Checklist Models
//!
//! Data structures persisted to local storage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Checklist type selects which set of categories is shown
///
/// Serialized as the label shown in the type selector, so data written by
/// earlier builds of the app keeps loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ChecklistType {
    #[default]
    #[serde(rename = "Compras")]
    Shopping,
    #[serde(rename = "Viagem")]
    Travel,
    #[serde(rename = "Doméstico")]
    Household,
    #[serde(rename = "Trabalho")]
    Work,
    #[serde(rename = "Livre")]
    Free,
}

impl ChecklistType {
    /// All types in selector order
    pub const ALL: [ChecklistType; 5] = [
        ChecklistType::Shopping,
        ChecklistType::Travel,
        ChecklistType::Household,
        ChecklistType::Work,
        ChecklistType::Free,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistType::Shopping => "Compras",
            ChecklistType::Travel => "Viagem",
            ChecklistType::Household => "Doméstico",
            ChecklistType::Work => "Trabalho",
            ChecklistType::Free => "Livre",
        }
    }

    /// Parse a stored label. Unknown labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Categories a fresh checklist of this type starts with
    pub fn default_categories(&self) -> &'static [&'static str] {
        match self {
            ChecklistType::Shopping => &[
                "Bruto",
                "Padaria",
                "Carnes",
                "Produto de Limpeza",
                "Hortifrut",
                "Utilidades",
            ],
            ChecklistType::Travel => &[
                "Documentos",
                "Roupas",
                "Higiene",
                "Eletrônicos",
                "Saúde",
                "Outros",
            ],
            ChecklistType::Household => &[
                "Limpeza",
                "Organização",
                "Manutenção",
                "Cozinha",
                "Lavanderia",
            ],
            ChecklistType::Work => &["Prioridades", "Reuniões", "Entregas", "Pendências"],
            ChecklistType::Free => &["Tarefas"],
        }
    }
}

impl fmt::Display for ChecklistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub checked: bool,
}

impl Item {
    /// New unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }
}

/// Categories and items of one checklist type
///
/// `categories` holds the display order; `items` has exactly one entry per
/// category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistData {
    #[serde(rename = "categorias", default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub items: BTreeMap<String, Vec<Item>>,
}

impl ChecklistData {
    /// Empty lists for the given category names
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let items = categories.iter().map(|c| (c.clone(), Vec::new())).collect();
        Self { categories, items }
    }

    /// Fresh data for a checklist type
    pub fn defaults_for(kind: ChecklistType) -> Self {
        Self::with_categories(kind.default_categories().iter().copied())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Items of a category, empty if the category is unknown
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.items.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total items across every category
    pub fn item_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
