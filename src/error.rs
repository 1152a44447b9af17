//! Store Fault Types
//!
//! Faults are the errors an operation raises instead of returning them in
//! the result envelope. Not-found is only raised when the caller asked for
//! it; a missing body or an unknown variant is always raised.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("No body provided to {operation}")]
    MissingBody { operation: &'static str },

    #[error("Product variant {0} not found")]
    VariantNotFound(String),
}

impl StoreError {
    /// Precondition faults that indicate misuse rather than expected absence.
    pub fn is_fatal(&self) -> bool {
        match self {
            StoreError::NotFound { .. } => false,
            StoreError::MissingBody { .. } | StoreError::VariantNotFound(_) => true,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
