//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpAnimalStore;
use crate::config::ApiConfig;
use crate::controller::{AnimalController, StateCell};
use crate::error::AppResult;
use crate::view_model::ViewModel;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Animal list view-model
    pub view: ViewModel,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub type AppController = AnimalController<HttpAnimalStore, AppStore>;

impl StateCell for AppStore {
    fn update_view<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> Option<R> {
        self.view().try_update(f)
    }
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copyable handle that builds controllers for event handlers.
///
/// One `HttpAnimalStore` is shared; cloning it reuses the same client.
#[derive(Clone, Copy)]
pub struct ControllerHandle {
    api: StoredValue<HttpAnimalStore>,
    store: AppStore,
}

impl ControllerHandle {
    pub fn new(config: ApiConfig, store: AppStore) -> Self {
        Self {
            api: StoredValue::new(HttpAnimalStore::new(config)),
            store,
        }
    }

    pub fn controller(&self) -> AppController {
        AnimalController::new(self.api.get_value(), self.store)
    }

    /// Run an operation in the background. Failures are already logged
    /// and recorded in the view-model.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut + 'static,
        Fut: Future<Output = AppResult<()>> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move {
            if let Err(err) = op(controller).await {
                log::debug!("[Store] Background operation ended with: {}", err);
            }
        });
    }
}

/// Get the controller handle from context
pub fn use_controller() -> ControllerHandle {
    expect_context::<ControllerHandle>()
}
