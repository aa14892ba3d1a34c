//! Animal List Component
//!
//! Filter controls, the card grid and the update dialog.

use leptos::prelude::*;

use crate::components::{AnimalCard, CheckupDialog, FilterBar, NewAnimalForm};
use crate::store::{use_app_store, use_controller, AppStateStoreFields};
use crate::view_model::Collection;

/// Last mutation failure with a dismiss button
#[component]
fn MutationErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.view().with(|vm| vm.mutation_error().map(|err| err.to_string()));

    view! {
        {move || message().map(|msg| view! {
            <div class="error-banner">
                <span>{msg}</span>
                <button on:click=move |_| store.view().update(|vm| vm.dismiss_error())>"×"</button>
            </div>
        })}
    }
}

#[component]
pub fn AnimalList() -> impl IntoView {
    let store = use_app_store();
    let controllers = use_controller();

    let visible = Memo::new(move |_| store.view().with(|vm| vm.visible()));
    let types = Memo::new(move |_| store.view().with(|vm| vm.types().to_vec()));
    let total = move || {
        store.view().with(|vm| match vm.collection() {
            Collection::Loaded(animals) => animals.len(),
            _ => 0,
        })
    };
    let is_loading = move || store.view().with(|vm| vm.is_loading());
    let load_failed = move || {
        store
            .view()
            .with(|vm| matches!(vm.collection(), Collection::Failed(_)))
    };

    view! {
        {move || {
            if load_failed() {
                view! {
                    <div class="load-error">
                        <span>"Error fetching data"</span>
                        <button on:click=move |_| controllers.spawn(|c| async move { c.load().await })>
                            "Retry"
                        </button>
                    </div>
                }
                    .into_any()
            } else if is_loading() {
                view! { <div class="loading">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="animal-list">
                        <h2>"Animal List"</h2>
                        <MutationErrorBanner />
                        <FilterBar types=types />
                        <div class="flex flex-wrap">
                            <For
                                each=move || visible.get()
                                key=|animal| animal.clone()
                                children=move |animal| view! { <AnimalCard animal=animal /> }
                            />
                        </div>
                        <p class="animal-count">
                            {move || format!("{} of {} animals", visible.get().len(), total())}
                        </p>
                        <NewAnimalForm />
                        <CheckupDialog />
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
