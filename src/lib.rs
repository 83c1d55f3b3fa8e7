//! untranslatable-fields
//!
//! Keeps selected fields identical across every translation of a record.
//! When a localized record is saved, the host calls
//! [`FieldPropagator::propagate`] from its post-save hook; the configured
//! fields are copied onto each translation sibling that holds a different
//! value.

pub mod config;
pub mod editor;
pub mod propagation;
pub mod record;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::{
    ConfigManager,
    PublishedPolicy,
    UntranslatableSettings,
};
pub use editor::{
    EditorField,
    decorate_editor_fields,
};
pub use propagation::{
    FieldPropagator,
    FieldSelector,
    PersistenceError,
    PropagationError,
    PropagationReport,
    PropagationScope,
    PublishedConflict,
};
pub use record::{
    Publishable,
    Record,
    RecordStore,
};
pub use types::{
    FieldValue,
    RecordId,
};
