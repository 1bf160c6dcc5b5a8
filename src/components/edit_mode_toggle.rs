//! Edit Mode Toggle Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::session::ChecklistSessionStoreFields;
use crate::store::use_app_store;

/// Checkbox showing or hiding the add/edit/remove controls
#[component]
pub fn EditModeToggle() -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        let checked = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.checked());
        if let Some(checked) = checked {
            store.update(|s| s.set_edit_mode(checked));
        }
    };

    view! {
        <div class="edit-mode-toggle">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || store.edit_mode().get()
                    on:change=on_change
                />
                "Modo de Edição"
            </label>
        </div>
    }
}
