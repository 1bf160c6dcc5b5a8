//! Checklist App
//!
//! Root component: type selector, edit-mode switch, category form and one
//! section per category of the active checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategorySection, EditModeToggle, NewCategoryForm, TypeSelector};
use crate::config::AppConfig;
use crate::session::{ChecklistSession, ChecklistSessionStoreFields};
use crate::storage::LocalStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Restore before first render
    let store = Store::new(ChecklistSession::load(&LocalStorage, config));
    provide_context(store);

    let categories = move || store.with(|s| s.current().categories.clone());

    view! {
        <div class="container">
            <TypeSelector />
            <EditModeToggle />

            <Show when=move || store.edit_mode().get()>
                <NewCategoryForm />
            </Show>

            <div class="categories">
                <For
                    each=categories
                    key=|category| category.clone()
                    children=move |category| view! { <CategorySection category=category /> }
                />
            </div>
        </div>
    }
}
