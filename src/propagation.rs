//! Copies untranslatable fields from a saved record into its translations.

mod error;
mod propagator;
mod scope;
mod selector;

pub use error::{
    PersistenceError,
    PropagationError,
    PublishedConflict,
};
pub use propagator::{
    FieldPropagator,
    PropagationReport,
};
pub use scope::{
    PropagationScope,
    SuppressGuard,
};
pub use selector::FieldSelector;
