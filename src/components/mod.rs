//! UI Components
//!
//! Leptos components for the checklist page.

mod type_selector;
mod edit_mode_toggle;
mod new_category_form;
mod category_section;
mod item_row;

pub use type_selector::TypeSelector;
pub use edit_mode_toggle::EditModeToggle;
pub use new_category_form::NewCategoryForm;
pub use category_section::CategorySection;
pub use item_row::ItemRow;
