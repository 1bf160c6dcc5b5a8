//! Category Section Component
//!
//! Category header (with inline rename), new item input and item list.

use leptos::html;
use leptos::prelude::*;

use crate::components::ItemRow;
use crate::session::ChecklistSessionStoreFields;
use crate::store::{store_add_item, store_commit_category_edit, use_app_store};

/// Header showing the category name, or the rename input while editing
#[component]
fn CategoryHeader(category: String) -> impl IntoView {
    let store = use_app_store();

    let is_editing = {
        let category = category.clone();
        move || store.edit_mode().get() && store.with(|s| s.is_editing_category(&category))
    };

    // Focus the rename field as soon as it is mounted
    let rename_input = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = rename_input.get() {
            let _ = input.focus();
        }
    });

    move || {
        if is_editing() {
            view! {
                <input
                    class="input categoria-input"
                    node_ref=rename_input
                    prop:value=move || store.with(|s| {
                        s.category_edit().map(|e| e.text.clone()).unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        store.update(|s| s.set_category_edit_text(text));
                    }
                    on:blur=move |_| store_commit_category_edit(&store)
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            store_commit_category_edit(&store);
                        }
                    }
                />
            }.into_any()
        } else {
            let name = category.clone();
            view! {
                <h2 class="categoria-titulo">
                    {category.clone()}
                    <Show when=move || store.edit_mode().get()>
                        <button
                            class="botao-editar"
                            title="Editar nome da categoria"
                            on:click={
                                let name = name.clone();
                                move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    store.update(|s| s.start_category_edit(&name));
                                }
                            }
                        >
                            "✎"
                        </button>
                    </Show>
                </h2>
            }.into_any()
        }
    }
}

/// Input + button adding an item to the category
#[component]
fn NewItemInput(category: String) -> impl IntoView {
    let store = use_app_store();

    let draft = {
        let category = category.clone();
        move || store.with(|s| s.draft(&category).to_string())
    };
    let on_input = {
        let category = category.clone();
        move |ev: web_sys::Event| {
            let text = event_target_value(&ev);
            store.update(|s| s.set_draft(&category, text));
        }
    };
    let on_keydown = {
        let category = category.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                store_add_item(&store, &category);
            }
        }
    };
    let placeholder = format!(" Novo item em {}", category);

    view! {
        <div class="adicionar-container">
            <input
                class="input"
                type="text"
                placeholder=placeholder
                prop:value=draft
                on:input=on_input
                on:keydown=on_keydown
            />
            <button class="botao-adicionar" on:click=move |_| store_add_item(&store, &category)>
                "+ Item"
            </button>
        </div>
    }
}

/// One category of the active checklist
#[component]
pub fn CategorySection(category: String) -> impl IntoView {
    let store = use_app_store();

    let rows = {
        let category = category.clone();
        move || {
            store.with(|s| {
                s.current()
                    .items_in(&category)
                    .iter()
                    .cloned()
                    .enumerate()
                    .collect::<Vec<_>>()
            })
        }
    };
    let input_category = category.clone();
    let row_category = category.clone();

    view! {
        <div class="categoria">
            <CategoryHeader category=category />

            <Show when=move || store.edit_mode().get()>
                <NewItemInput category=input_category.clone() />
            </Show>

            // Text and state are part of the key so edits re-render the row
            <ul class="lista-compras-lista">
                <For
                    each=rows
                    key=|(index, item)| (*index, item.text.clone(), item.checked)
                    children=move |(index, item)| {
                        view! { <ItemRow category=row_category.clone() index=index item=item /> }
                    }
                />
            </ul>
        </div>
    }
}
