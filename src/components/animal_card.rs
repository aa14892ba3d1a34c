//! Animal Card Component
//!
//! One record with its update and delete actions.

use leptos::prelude::*;

use crate::models::{format_checkup, Animal};
use crate::store::{use_app_store, use_controller, AppStateStoreFields};

#[component]
pub fn AnimalCard(animal: Animal) -> impl IntoView {
    let store = use_app_store();
    let controllers = use_controller();

    let id = animal.id.clone();
    let deleting = move || store.view().with(|vm| vm.is_deleting(&id));
    let checkup = format_checkup(animal.next_checkup.as_deref());

    let target = animal.clone();
    let on_update = move |_| {
        let target = target.clone();
        store.view().update(move |vm| vm.begin_edit(target));
    };

    let delete_id = animal.id.clone();
    let on_delete = move |_| {
        let id = delete_id.clone();
        controllers.spawn(move |c| async move { c.delete(id).await });
    };

    view! {
        <div class="animal-card">
            <div class="animal-card-content">
                <h3 class="animal-name">{animal.name.clone()}</h3>
                <p class="animal-detail">"Age: " {animal.age.text().to_string()} " years"</p>
                <p class="animal-detail">"Type: " {animal.kind.clone()}</p>
                <p class="animal-detail">"Next Checkup: " {checkup}</p>
            </div>
            <div class="animal-card-actions">
                <button class="update-btn" disabled=deleting.clone() on:click=on_update>
                    "Update"
                </button>
                <button class="delete-btn" disabled=deleting on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
