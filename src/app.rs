//! Animal Checkups App
//!
//! Root component: creates the store, provides context and starts the first load.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::AnimalList;
use crate::config::ApiConfig;
use crate::store::{AppState, ControllerHandle};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("[APP] Using animal store at {}", config.base_url());

    let store = Store::new(AppState::default());
    let controllers = ControllerHandle::new(config, store);

    // Provide context to all children
    provide_context(store);
    provide_context(controllers);

    controllers.spawn(|c| async move { c.load().await });

    view! {
        <div class="App">
            <AnimalList />
        </div>
    }
}
