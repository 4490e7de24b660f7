//! # Film Store Errors

use thiserror::Error;

use crate::codec::CodecError;

/// Result type for film store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Film store errors.
///
/// `NotFound` and `Conflict` are expected outcomes of a lookup or a
/// duplicate check. `IdsExhausted` means the highest stored id is
/// `u64::MAX`. `Persistence` means the collection could not be saved.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Film not found: {0}")]
    NotFound(u64),

    #[error("Film already exists: '{title}' by {director}")]
    Conflict { title: String, director: String },

    #[error("No id left after {0}")]
    IdsExhausted(u64),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] CodecError),
}

impl StoreError {
    /// Returns true for a missing id
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Returns true for a duplicate title and director
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
