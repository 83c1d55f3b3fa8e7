//! Recursion guard for writes made by the propagator itself.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use crate::types::RecordId;

/// Records whose post-save hook must not propagate again.
///
/// Lives for one save request and is passed explicitly to every
/// `propagate` and `RecordStore::write` call of that request. Single
/// threaded: the hook runs inline with the save that triggered it.
#[derive(Default)]
pub struct PropagationScope {
    /// Currently suppressed records
    suppressed: RefCell<HashSet<RecordId>>,
}

impl PropagationScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses propagation for `id` until the returned guard is dropped.
    ///
    /// The guard clears the marker on every exit path, including early
    /// returns through `?` and unwinding.
    #[must_use = "propagation is only suppressed while the guard is alive"]
    pub fn suppress(&self, id: RecordId) -> SuppressGuard<'_> {
        let newly_inserted = self.suppressed.borrow_mut().insert(id.clone());
        SuppressGuard { scope: self, id, release: newly_inserted }
    }

    #[must_use]
    pub fn is_suppressed(&self, id: &RecordId) -> bool {
        self.suppressed.borrow().contains(id)
    }

    /// Whether no record is suppressed.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.suppressed.borrow().is_empty()
    }
}

impl fmt::Debug for PropagationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropagationScope").field("suppressed", &self.suppressed.borrow()).finish()
    }
}

/// Clears a suppression marker when dropped.
pub struct SuppressGuard<'a> {
    /// Scope holding the marker
    scope: &'a PropagationScope,
    /// Suppressed record
    id: RecordId,
    /// Whether this guard set the marker (an outer guard may own it)
    release: bool,
}

impl SuppressGuard<'_> {
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Drop for SuppressGuard<'_> {
    fn drop(&mut self) {
        if self.release {
            self.scope.suppressed.borrow_mut().remove(&self.id);
        }
    }
}

impl fmt::Debug for SuppressGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuppressGuard")
            .field("id", &self.id)
            .field("release", &self.release)
            .finish()
    }
}
