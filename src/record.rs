//! Collaborator traits implemented by the host's content layer.
//!
//! The host owns records and their storage; this crate only reads fields,
//! overwrites them on translation siblings and asks the store to persist.

use crate::propagation::{
    PersistenceError,
    PropagationScope,
};
use crate::types::{
    FieldValue,
    RecordId,
};

/// A typed, localized content record.
pub trait Record {
    /// Type name used to look up the configured field list.
    fn type_name(&self) -> &str;

    /// Identity of this localized variant.
    fn id(&self) -> RecordId;

    /// Declared field names, in schema order.
    ///
    /// Only content fields belong here; identity and bookkeeping columns
    /// must not be listed, since invert mode propagates every declared field.
    fn declared_fields(&self) -> Vec<String>;

    /// Current value of `name`, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn set_field(&mut self, name: &str, value: FieldValue);

    /// Publishing capability, for record types with a draft/live split.
    fn publish_state(&self) -> Option<&dyn Publishable> {
        None
    }
}

/// Draft/live state of a record.
pub trait Publishable {
    fn is_published(&self) -> bool;
}

/// Translation lookup and persistence for one record type.
///
/// `write` is where the host runs its save pipeline. When that pipeline
/// fires the post-save hook again, it must pass the same `scope` along so
/// the nested call sees the suppressed sibling.
pub trait RecordStore {
    type Record: Record;

    /// Every other localized variant of `source`, excluding `source` itself.
    ///
    /// # Errors
    /// The underlying storage failed to load the siblings.
    fn translations(&self, source: &Self::Record) -> Result<Vec<Self::Record>, PersistenceError>;

    /// Persists `record`.
    ///
    /// # Errors
    /// The underlying storage failed to save the record.
    fn write(
        &mut self,
        record: &Self::Record,
        scope: &PropagationScope,
    ) -> Result<(), PersistenceError>;

    /// Publishes `record` so its live version matches the draft.
    ///
    /// # Errors
    /// Stores without a draft/live split return `PersistenceError::Unsupported`.
    fn publish(
        &mut self,
        record: &Self::Record,
        scope: &PropagationScope,
    ) -> Result<(), PersistenceError> {
        let _ = scope;
        Err(PersistenceError::Unsupported { record: record.id(), operation: "publish" })
    }
}
