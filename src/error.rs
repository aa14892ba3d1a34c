//! Error Types
//!
//! Store failures, refused intents, and the view-level taxonomy.

use crate::models::AnimalId;

/// Failure talking to the remote animal store.
///
/// The UI treats every variant the same way; the split only sharpens logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Network or fetch failure before a response arrived
    Transport(String),
    /// Response with a non-success status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Request failed: {}", msg),
            StoreError::Status(code) => write!(f, "Server responded with status {}", code),
            StoreError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            StoreError::Status(status.as_u16())
        } else if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

/// An intent refused before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    NothingSelected,
    MissingDate,
    AlreadySubmitting,
    DeleteInFlight(AnimalId),
    InvalidNewAnimal(&'static str),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::NothingSelected => write!(f, "No animal is selected for update"),
            EditError::MissingDate => write!(f, "A new checkup date is required"),
            EditError::AlreadySubmitting => write!(f, "The update is already being saved"),
            EditError::DeleteInFlight(id) => write!(f, "Animal {} is already being deleted", id),
            EditError::InvalidNewAnimal(field) => write!(f, "New animal is missing a {}", field),
        }
    }
}

impl std::error::Error for EditError {}

/// Errors surfaced by controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Initial or refresh fetch failed
    LoadFailure(StoreError),
    /// Create, update or delete failed
    MutationFailure(StoreError),
    /// Intent refused locally
    Precondition(EditError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::LoadFailure(err) => write!(f, "Error fetching data: {}", err),
            AppError::MutationFailure(err) => write!(f, "Change was not saved: {}", err),
            AppError::Precondition(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::LoadFailure(err) | AppError::MutationFailure(err) => Some(err),
            AppError::Precondition(err) => Some(err),
        }
    }
}

impl From<EditError> for AppError {
    fn from(err: EditError) -> Self {
        AppError::Precondition(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
