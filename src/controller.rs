//! Animal Controller
//!
//! Runs requests against the animal store and applies their outcomes to
//! the view-model. Every successful mutation invalidates the collection
//! and reloads it; nothing is patched locally.

use std::rc::Rc;

use crate::api::AnimalStore;
use crate::error::{AppError, AppResult, EditError};
use crate::models::{AnimalId, NewAnimal};
use crate::view_model::ViewModel;

/// Somewhere the view-model lives.
///
/// `update_view` returns `None` once the owner has been torn down; late
/// responses are then dropped.
pub trait StateCell: Clone + 'static {
    fn update_view<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> Option<R>;
}

pub struct AnimalController<S, C> {
    store: Rc<S>,
    state: C,
}

impl<S, C: Clone> Clone for AnimalController<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            state: self.state.clone(),
        }
    }
}

impl<S: AnimalStore, C: StateCell> AnimalController<S, C> {
    pub fn new(store: S, state: C) -> Self {
        Self::with_shared(Rc::new(store), state)
    }

    pub fn with_shared(store: Rc<S>, state: C) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Fetch the full collection, replacing whatever was loaded before.
    pub async fn load(&self) -> AppResult<()> {
        let Some(ticket) = self.state.update_view(|vm| vm.start_load()) else {
            return Ok(());
        };
        log::debug!("[Controller] Loading animals ({:?})", ticket);

        let outcome = self.store.list().await;
        let result = match &outcome {
            Ok(animals) => {
                log::info!("[Controller] Loaded {} animals", animals.len());
                Ok(())
            }
            Err(err) => {
                log::error!("[Controller] Error fetching animals: {}", err);
                Err(AppError::LoadFailure(err.clone()))
            }
        };
        self.state.update_view(move |vm| vm.finish_load(ticket, outcome));
        result
    }

    /// Send the dialog's pending checkup date, then reload on success.
    pub async fn confirm_edit(&self) -> AppResult<()> {
        let request = self
            .state
            .update_view(|vm| vm.start_update())
            .unwrap_or(Err(EditError::NothingSelected))
            .map_err(|err| {
                log::warn!("[Controller] Update refused: {}", err);
                AppError::from(err)
            })?;
        log::debug!("[Controller] Updating checkup of animal {}", request.id);

        let outcome = self
            .store
            .update_checkup(&request.id, &request.next_checkup)
            .await
            .map(drop);
        self.state
            .update_view(|vm| vm.finish_update(request.ticket, outcome.clone()));

        match outcome {
            Ok(()) => {
                log::info!("[Controller] Updated checkup of animal {}", request.id);
                self.load().await
            }
            Err(err) => {
                log::error!("[Controller] Error updating animal {}: {}", request.id, err);
                Err(AppError::MutationFailure(err))
            }
        }
    }

    /// Delete immediately, then reload on success.
    pub async fn delete(&self, id: AnimalId) -> AppResult<()> {
        let ticket = self
            .state
            .update_view(|vm| vm.start_delete(&id))
            .unwrap_or(Err(EditError::DeleteInFlight(id.clone())))
            .map_err(|err| {
                log::warn!("[Controller] Delete refused: {}", err);
                AppError::from(err)
            })?;
        log::debug!("[Controller] Deleting animal {}", id);

        let outcome = self.store.delete(&id).await.map(drop);
        self.state
            .update_view(|vm| vm.finish_delete(&id, ticket, outcome.clone()));

        match outcome {
            Ok(()) => {
                log::info!("[Controller] Deleted animal {}", id);
                self.load().await
            }
            Err(err) => {
                log::error!("[Controller] Error deleting animal {}: {}", id, err);
                Err(AppError::MutationFailure(err))
            }
        }
    }

    pub async fn create(&self, animal: NewAnimal) -> AppResult<()> {
        let ticket = self
            .state
            .update_view(|vm| vm.start_create(&animal))
            .unwrap_or(Err(EditError::AlreadySubmitting))
            .map_err(|err| {
                log::warn!("[Controller] Create refused: {}", err);
                AppError::from(err)
            })?;

        let outcome = self.store.create(&animal).await;
        let created = outcome.as_ref().map(|a| a.id.clone()).map_err(Clone::clone);
        self.state
            .update_view(|vm| vm.finish_create(ticket, created.clone().map(drop)));

        match created {
            Ok(id) => {
                log::info!("[Controller] Created animal {}", id);
                self.load().await
            }
            Err(err) => {
                log::error!("[Controller] Error creating animal: {}", err);
                Err(AppError::MutationFailure(err))
            }
        }
    }
}
