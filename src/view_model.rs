//! Animal Collection View-Model
//!
//! Single owned state object behind the animal list: the fetched
//! collection, the filters, the edit dialog and the lifecycle of every
//! outstanding request. All transitions are synchronous; the controller
//! performs the requests and feeds their outcomes back in.

use std::collections::BTreeMap;

use crate::error::{EditError, StoreError};
use crate::models::{Animal, AnimalId, NewAnimal};
use crate::pipeline::{derive_visible, distinct_types, AgeSort, Filters, TypeFilter};

/// Identifies one issued request. Later requests get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(Ticket),
    Succeeded,
    Failed(StoreError),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight(_))
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Last confirmed server state of the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Collection {
    #[default]
    NotLoaded,
    Loaded(Vec<Animal>),
    Failed(StoreError),
}

/// The update dialog. Open always carries its target record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    #[default]
    Closed,
    Open(EditDialog),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditDialog {
    pub animal: Animal,
    pub pending_date: String,
    pub submission: RequestState,
}

/// Everything needed to send an update, issued by [`ViewModel::start_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub ticket: Ticket,
    pub id: AnimalId,
    pub next_checkup: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    collection: Collection,
    types: Vec<String>,
    filters: Filters,
    edit: EditState,
    load: RequestState,
    create: RequestState,
    deletes: BTreeMap<AnimalId, Ticket>,
    /// Confirmed deletes, keyed by the ticket issued when they finished.
    /// Kept until a load started after that point has landed.
    removed: BTreeMap<AnimalId, Ticket>,
    mutation_error: Option<StoreError>,
    last_ticket: u64,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }

    // ========================
    // Derived View
    // ========================

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Filtered and sorted records; empty unless a load has succeeded.
    pub fn visible(&self) -> Vec<Animal> {
        match &self.collection {
            Collection::Loaded(animals) => derive_visible(animals, &self.filters),
            _ => Vec::new(),
        }
    }

    /// Distinct types of the current collection, for the type filter.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(self.edit, EditState::Open(_))
    }

    pub fn load_state(&self) -> &RequestState {
        &self.load
    }

    pub fn create_state(&self) -> &RequestState {
        &self.create
    }

    /// Nothing loaded yet and no failure to report.
    pub fn is_loading(&self) -> bool {
        self.collection == Collection::NotLoaded
    }

    /// In flight, or deleted but not yet gone from the loaded collection.
    pub fn is_deleting(&self, id: &AnimalId) -> bool {
        self.deletes.contains_key(id) || self.removed.contains_key(id)
    }

    /// Whether the dialog's confirm button should be enabled.
    pub fn can_confirm(&self) -> bool {
        match &self.edit {
            EditState::Open(dialog) => {
                !dialog.pending_date.trim().is_empty() && !dialog.submission.is_in_flight()
            }
            EditState::Closed => false,
        }
    }

    /// Most recent failed mutation, until dismissed or a mutation succeeds.
    pub fn mutation_error(&self) -> Option<&StoreError> {
        self.mutation_error.as_ref()
    }

    // ========================
    // Presentation Intents
    // ========================

    pub fn set_age_filter(&mut self, text: impl Into<String>) {
        self.filters.age = text.into();
    }

    /// `""` clears the type filter.
    pub fn set_type_filter(&mut self, selection: &str) {
        self.filters.kind = TypeFilter::from_selection(selection);
    }

    pub fn toggle_sort_by_age(&mut self) {
        self.filters.sort = self.filters.sort.toggled();
    }

    pub fn set_age_sort(&mut self, sort: AgeSort) {
        self.filters.sort = sort;
    }

    /// Open the dialog for `animal` with an empty pending date.
    pub fn begin_edit(&mut self, animal: Animal) {
        log::debug!("[ViewModel] Begin edit of animal {}", animal.id);
        self.edit = EditState::Open(EditDialog {
            animal,
            pending_date: String::new(),
            submission: RequestState::Idle,
        });
    }

    pub fn set_pending_date(&mut self, date: impl Into<String>) {
        if let EditState::Open(dialog) = &mut self.edit {
            dialog.pending_date = date.into();
        }
    }

    /// Close the dialog, dropping the pending date and selection.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Closed;
    }

    pub fn dismiss_error(&mut self) {
        self.mutation_error = None;
    }

    // ========================
    // Request Lifecycle
    // ========================

    /// Issue a load. Earlier loads still in flight become superseded.
    pub fn start_load(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        self.load = RequestState::InFlight(ticket);
        ticket
    }

    /// Apply a load response. Returns `false` when it was superseded and dropped.
    pub fn finish_load(&mut self, ticket: Ticket, outcome: Result<Vec<Animal>, StoreError>) -> bool {
        if self.load != RequestState::InFlight(ticket) {
            log::warn!("[ViewModel] Dropping superseded load response {:?}", ticket);
            return false;
        }
        self.removed.retain(|_, removed_at| *removed_at > ticket);
        match outcome {
            Ok(animals) => {
                self.types = distinct_types(&animals);
                self.collection = Collection::Loaded(animals);
                self.load = RequestState::Succeeded;
            }
            Err(err) => {
                self.types.clear();
                self.collection = Collection::Failed(err.clone());
                self.load = RequestState::Failed(err);
            }
        }
        true
    }

    /// Check the dialog can be submitted and mark it in flight.
    pub fn start_update(&mut self) -> Result<UpdateRequest, EditError> {
        let ticket = Ticket(self.last_ticket + 1);
        let EditState::Open(dialog) = &mut self.edit else {
            return Err(EditError::NothingSelected);
        };
        if dialog.submission.is_in_flight() {
            return Err(EditError::AlreadySubmitting);
        }
        let next_checkup = dialog.pending_date.trim().to_string();
        if next_checkup.is_empty() {
            return Err(EditError::MissingDate);
        }
        dialog.submission = RequestState::InFlight(ticket);
        let id = dialog.animal.id.clone();
        self.last_ticket = ticket.0;
        Ok(UpdateRequest { ticket, id, next_checkup })
    }

    /// Apply an update response. The dialog only reacts if it still shows
    /// the submission that produced it.
    pub fn finish_update(&mut self, ticket: Ticket, outcome: Result<(), StoreError>) {
        let current = matches!(
            &self.edit,
            EditState::Open(dialog) if dialog.submission == RequestState::InFlight(ticket)
        );
        match outcome {
            Ok(()) => {
                self.mutation_error = None;
                if current {
                    self.edit = EditState::Closed;
                }
            }
            Err(err) => {
                if let (true, EditState::Open(dialog)) = (current, &mut self.edit) {
                    dialog.submission = RequestState::Failed(err.clone());
                }
                self.mutation_error = Some(err);
            }
        }
    }

    /// Refuses a second delete of an id whose delete is still outstanding.
    pub fn start_delete(&mut self, id: &AnimalId) -> Result<Ticket, EditError> {
        if self.is_deleting(id) {
            return Err(EditError::DeleteInFlight(id.clone()));
        }
        let ticket = self.issue_ticket();
        self.deletes.insert(id.clone(), ticket);
        Ok(ticket)
    }

    pub fn finish_delete(&mut self, id: &AnimalId, ticket: Ticket, outcome: Result<(), StoreError>) {
        if self.deletes.get(id) == Some(&ticket) {
            self.deletes.remove(id);
        }
        match outcome {
            Ok(()) => {
                let removed_at = self.issue_ticket();
                self.removed.insert(id.clone(), removed_at);
                self.mutation_error = None;
            }
            Err(err) => self.mutation_error = Some(err),
        }
    }

    pub fn start_create(&mut self, animal: &NewAnimal) -> Result<Ticket, EditError> {
        if self.create.is_in_flight() {
            return Err(EditError::AlreadySubmitting);
        }
        if animal.name.trim().is_empty() {
            return Err(EditError::InvalidNewAnimal("name"));
        }
        if animal.age.trim().is_empty() {
            return Err(EditError::InvalidNewAnimal("age"));
        }
        if animal.kind.trim().is_empty() {
            return Err(EditError::InvalidNewAnimal("type"));
        }
        let ticket = self.issue_ticket();
        self.create = RequestState::InFlight(ticket);
        Ok(ticket)
    }

    pub fn finish_create(&mut self, ticket: Ticket, outcome: Result<(), StoreError>) {
        if self.create != RequestState::InFlight(ticket) {
            return;
        }
        match outcome {
            Ok(()) => {
                self.create = RequestState::Succeeded;
                self.mutation_error = None;
            }
            Err(err) => {
                self.create = RequestState::Failed(err.clone());
                self.mutation_error = Some(err);
            }
        }
    }
}
