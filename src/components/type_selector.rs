//! Type Selector Component
//!
//! Dropdown switching the active checklist type.

use leptos::prelude::*;

use crate::models::ChecklistType;
use crate::store::{store_select_type, use_app_store};

/// Checklist type dropdown
#[component]
pub fn TypeSelector() -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match ChecklistType::parse(&value) {
            Some(kind) => store_select_type(&store, kind),
            None => log::warn!("[TYPE] Unknown checklist type '{}'", value),
        }
    };

    view! {
        <div class="type-selector">
            <label>"Tipo de Checklist:"</label>
            <select on:change=on_change>
                {ChecklistType::ALL.into_iter().map(|kind| {
                    let is_selected = move || store.with(|s| s.active() == kind);
                    view! {
                        <option value=kind.as_str() prop:selected=is_selected>
                            {kind.as_str()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
