//! New Animal Form Component
//!
//! Form for adding a record to the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NewAnimal;
use crate::store::{use_app_store, use_controller, AppStateStoreFields};

#[component]
pub fn NewAnimalForm() -> impl IntoView {
    let store = use_app_store();
    let controllers = use_controller();

    let (name, set_name) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (checkup, set_checkup) = signal(String::new());

    let saving = move || store.view().with(|vm| vm.create_state().is_in_flight());
    let failure = move || {
        store
            .view()
            .with(|vm| vm.create_state().error().map(|err| err.to_string()))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let date = checkup.get();
        let new_animal = NewAnimal {
            name: name.get(),
            age: age.get(),
            kind: kind.get(),
            next_checkup: (!date.is_empty()).then_some(date),
        };
        let controller = controllers.controller();
        spawn_local(async move {
            if controller.create(new_animal).await.is_ok() {
                set_name.set(String::new());
                set_age.set(String::new());
                set_kind.set(String::new());
                set_checkup.set(String::new());
            }
        });
    };

    view! {
        <form class="new-animal-form" on:submit=on_submit>
            <h3>"Add Animal"</h3>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Age"
                prop:value=move || age.get()
                on:input=move |ev| set_age.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Type"
                prop:value=move || kind.get()
                on:input=move |ev| set_kind.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || checkup.get()
                on:input=move |ev| set_checkup.set(event_target_value(&ev))
            />
            <button type="submit" disabled=saving>"Add"</button>
            {move || failure().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
