//! Checkup Dialog Component
//!
//! Modal for entering a new checkup date for the selected animal.

use leptos::prelude::*;

use crate::store::{use_app_store, use_controller, AppStateStoreFields};
use crate::view_model::EditState;

#[component]
pub fn CheckupDialog() -> impl IntoView {
    let store = use_app_store();
    let controllers = use_controller();

    let open = move || store.view().with(|vm| vm.is_dialog_open());
    let subject = move || {
        store.view().with(|vm| match vm.edit() {
            EditState::Open(dialog) => dialog.animal.name.clone(),
            EditState::Closed => String::new(),
        })
    };
    let pending = move || {
        store.view().with(|vm| match vm.edit() {
            EditState::Open(dialog) => dialog.pending_date.clone(),
            EditState::Closed => String::new(),
        })
    };
    let saving = move || {
        store.view().with(|vm| match vm.edit() {
            EditState::Open(dialog) => dialog.submission.is_in_flight(),
            EditState::Closed => false,
        })
    };
    let failure = move || {
        store.view().with(|vm| match vm.edit() {
            EditState::Open(dialog) => dialog.submission.error().map(|err| err.to_string()),
            EditState::Closed => None,
        })
    };
    let can_confirm = move || store.view().with(|vm| vm.can_confirm());

    let cancel = move || store.view().update(|vm| vm.cancel_edit());

    view! {
        <Show when=open>
            <div class="modal-backdrop" on:click=move |_| cancel()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"Update Checkup Date"</h2>
                    <p class="modal-subject">{subject}</p>
                    <label for="checkup-date">"New Checkup Date"</label>
                    <input
                        id="checkup-date"
                        type="date"
                        prop:value=pending
                        on:input=move |ev| {
                            let date = event_target_value(&ev);
                            store.view().update(move |vm| vm.set_pending_date(date));
                        }
                    />
                    {move || failure().map(|msg| view! { <p class="modal-error">{msg}</p> })}
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                        <button
                            class="confirm-btn"
                            disabled=move || !can_confirm()
                            on:click=move |_| controllers.spawn(|c| async move { c.confirm_edit().await })
                        >
                            {move || if saving() { "Saving..." } else { "Update" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
