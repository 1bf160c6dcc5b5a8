//! Item Row Component
//!
//! A single checklist entry: click to toggle, inline text editing and
//! removal while edit mode is on.

use leptos::html;
use leptos::prelude::*;

use crate::models::Item;
use crate::session::ChecklistSessionStoreFields;
use crate::store::{store_commit_item_edit, store_remove_item, store_toggle_item, use_app_store};

/// A single item row in a category list
#[component]
pub fn ItemRow(category: String, index: usize, item: Item) -> impl IntoView {
    let store = use_app_store();

    let checked = item.checked;
    let text = item.text;
    let row_class = if checked {
        "lista-compras-item checked"
    } else {
        "lista-compras-item"
    };

    let is_editing = {
        let category = category.clone();
        move || store.edit_mode().get() && store.with(|s| s.is_editing_item(&category, index))
    };

    let on_edit = {
        let category = category.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            store.update(|s| s.start_item_edit(&category, index));
        }
    };
    let on_remove = {
        let category = category.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            store_remove_item(&store, &category, index);
        }
    };
    // Focus the edit field as soon as it is mounted
    let edit_input = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_input.get() {
            let _ = input.focus();
        }
    });

    let on_toggle = move |_: web_sys::MouseEvent| store_toggle_item(&store, &category, index);

    view! {
        <li class=row_class>
            {move || if is_editing() {
                view! {
                    <input
                        class="input"
                        node_ref=edit_input
                        prop:value=move || store.with(|s| {
                            s.item_edit().map(|e| e.text.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            store.update(|s| s.set_item_edit_text(text));
                        }
                        on:blur=move |_| store_commit_item_edit(&store)
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                store_commit_item_edit(&store);
                            }
                        }
                    />
                }.into_any()
            } else {
                let on_toggle = on_toggle.clone();
                view! {
                    <span class="item-text" on:click=on_toggle>
                        {text.clone()}
                    </span>
                }.into_any()
            }}

            <Show when=move || store.edit_mode().get()>
                <button class="botao-editar" on:click=on_edit.clone()>"✎"</button>
                <button class="botao-remover" on:click=on_remove.clone()>"🗑"</button>
            </Show>
        </li>
    }
}
