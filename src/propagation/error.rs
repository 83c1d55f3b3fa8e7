//! Errors raised while propagating fields to translations.

use thiserror::Error;

use crate::types::RecordId;

/// Errors raised by a `RecordStore`.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The store rejected or failed to save the record
    #[error("Failed to write record '{record}': {message}")]
    Write { record: RecordId, message: String },
    /// The store does not support the operation for this record
    #[error("Record '{record}' does not support {operation}")]
    Unsupported { record: RecordId, operation: &'static str },
    /// Any other storage failure
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A published sibling that propagation would have changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Record '{record}' ({type_name}) is published; propagating {} would change its live content",
    .fields.join(", ")
)]
pub struct PublishedConflict {
    pub record: RecordId,
    pub type_name: String,
    /// Fields whose values differ from the source
    pub fields: Vec<String>,
}

/// Errors returned by `FieldPropagator::propagate`.
#[derive(Error, Debug)]
pub enum PropagationError {
    /// Loading the translations of the source record failed
    #[error("Failed to load translations of '{record}': {source}")]
    Translations {
        record: RecordId,
        #[source]
        source: PersistenceError,
    },
    /// Writing or publishing a sibling failed; earlier siblings stay written
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// A published sibling was hit under the abort policy
    #[error(transparent)]
    PublishedConflict(PublishedConflict),
}
