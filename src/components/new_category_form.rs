//! New Category Form Component
//!
//! Form for appending a category to the active checklist.

use leptos::prelude::*;

use crate::store::{store_commit_new_category, use_app_store};

/// Input + button adding a category
#[component]
pub fn NewCategoryForm() -> impl IntoView {
    let store = use_app_store();

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_commit_new_category(&store);
    };

    view! {
        <form class="new-category-form" on:submit=add_category>
            <input
                class="input"
                type="text"
                placeholder="Nova categoria"
                prop:value=move || store.with(|s| s.new_category_draft().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.update(|s| s.set_new_category_draft(text));
                }
            />
            <button type="submit" class="botao-adicionar">"+ Categoria"</button>
        </form>
    }
}
