//! Filter Bar Component
//!
//! Age text filter, type select and the age sort toggle.
//!
//! The toggle flips between store order and ascending age, as
//! `ViewModel::toggle_sort_by_age` does; an explicit direction
//! (including descending) is set through `ViewModel::set_age_sort`.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar(types: Memo<Vec<String>>) -> impl IntoView {
    let store = use_app_store();

    let age = move || store.view().with(|vm| vm.filters().age.clone());
    let kind = move || store.view().with(|vm| vm.filters().kind.selection().to_string());
    let sort_label = move || store.view().with(|vm| vm.filters().sort.button_label());

    view! {
        <div class="filter-bar">
            <input
                id="filter-age"
                type="text"
                placeholder="Filter by Age"
                prop:value=age
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.view().update(move |vm| vm.set_age_filter(text));
                }
            />
            <label class="filter-type-label" for="filter-type">"Filter by Type"</label>
            <select
                id="filter-type"
                prop:value=kind
                on:change=move |ev| {
                    let selection = event_target_value(&ev);
                    store.view().update(move |vm| vm.set_type_filter(&selection));
                }
            >
                <option value="">"All"</option>
                <For
                    each=move || types.get()
                    key=|kind| kind.clone()
                    children=move |kind| view! { <option value=kind.clone()>{kind.clone()}</option> }
                />
            </select>
            <button
                class="sort-btn"
                on:click=move |_| store.view().update(|vm| vm.toggle_sort_by_age())
            >
                {sort_label}
            </button>
        </div>
    }
}
