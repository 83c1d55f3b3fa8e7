//! Post-save propagation of untranslatable fields.

use std::sync::Arc;

use indexmap::IndexSet;

use super::{
    FieldSelector,
    PropagationError,
    PropagationScope,
    PublishedConflict,
};
use crate::config::{
    PublishedPolicy,
    UntranslatableSettings,
};
use crate::record::{
    Record,
    RecordStore,
};
use crate::types::{
    FieldValue,
    RecordId,
};

/// Outcome of one `propagate` call, by sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Siblings that were written
    pub written: Vec<RecordId>,
    /// Siblings that already held the source values
    pub unchanged: Vec<RecordId>,
    /// Published siblings left untouched under the skip policy
    pub conflicts: Vec<PublishedConflict>,
    /// Published siblings written anyway under the overwrite or republish policy
    pub overwritten: Vec<RecordId>,
    /// The source was itself being written by a propagation
    pub suppressed: bool,
}

impl PropagationReport {
    /// Report for a call the recursion guard turned into a no-op.
    fn suppressed() -> Self {
        Self { suppressed: true, ..Self::default() }
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Copies untranslatable fields from a saved record into its translations.
///
/// Call [`FieldPropagator::propagate`] from the host's post-save hook.
#[derive(Debug, Clone, Default)]
pub struct FieldPropagator {
    /// Settings snapshot
    settings: Arc<UntranslatableSettings>,
}

impl FieldPropagator {
    #[must_use]
    pub const fn new(settings: Arc<UntranslatableSettings>) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &UntranslatableSettings {
        &self.settings
    }

    #[must_use]
    pub fn selector(&self) -> FieldSelector<'_> {
        FieldSelector::new(&self.settings)
    }

    /// Fields of `record` that are shared by all of its translations.
    #[must_use]
    pub fn untranslatable_fields<R: Record + ?Sized>(&self, record: &R) -> IndexSet<String> {
        self.selector().resolve_fields(record.type_name(), &record.declared_fields())
    }

    /// Pushes the untranslatable fields of `source` onto each of its translations.
    ///
    /// Only siblings with at least one differing value are written. Each
    /// write runs with the sibling suppressed in `scope`, so the post-save
    /// hook it triggers returns without propagating again.
    ///
    /// # Errors
    /// - Loading the translations failed
    /// - Writing or publishing a sibling failed (earlier siblings stay written)
    /// - A published sibling would change and the policy is `abort`
    pub fn propagate<S: RecordStore>(
        &self,
        source: &S::Record,
        store: &mut S,
        scope: &PropagationScope,
    ) -> Result<PropagationReport, PropagationError> {
        let source_id = source.id();
        if scope.is_suppressed(&source_id) {
            tracing::debug!(record = %source_id, "Write issued by propagation, skipping");
            return Ok(PropagationReport::suppressed());
        }

        let fields = self.untranslatable_fields(source);
        if fields.is_empty() {
            tracing::debug!(
                record = %source_id,
                "No untranslatable fields for '{}'",
                source.type_name()
            );
            return Ok(PropagationReport::default());
        }

        let candidates = source_values(source, &fields);
        let siblings = store.translations(source).map_err(|error| {
            PropagationError::Translations { record: source_id.clone(), source: error }
        })?;

        tracing::debug!(
            record = %source_id,
            siblings = siblings.len(),
            "Propagating {} field(s)",
            candidates.len()
        );

        let mut report = PropagationReport::default();
        for mut sibling in siblings {
            let sibling_id = sibling.id();
            if sibling_id == source_id {
                continue;
            }

            let changes: Vec<&(String, FieldValue)> = candidates
                .iter()
                .filter(|(name, value)| sibling.field(name).as_ref() != Some(value))
                .collect();

            if changes.is_empty() {
                tracing::debug!(record = %sibling_id, "Already up to date");
                report.unchanged.push(sibling_id);
                continue;
            }

            let published = sibling.publish_state().is_some_and(|state| state.is_published());
            if published {
                let conflict = PublishedConflict {
                    record: sibling_id.clone(),
                    type_name: sibling.type_name().to_string(),
                    fields: changes.iter().map(|(name, _)| name.clone()).collect(),
                };
                match self.settings.published_policy {
                    PublishedPolicy::Skip => {
                        tracing::warn!("{conflict}; skipped");
                        report.conflicts.push(conflict);
                        continue;
                    }
                    PublishedPolicy::Abort => {
                        return Err(PropagationError::PublishedConflict(conflict));
                    }
                    PublishedPolicy::Overwrite | PublishedPolicy::Republish => {
                        tracing::debug!(record = %sibling_id, "Overwriting published record");
                    }
                }
            }

            for (name, value) in &changes {
                sibling.set_field(name, value.clone());
            }

            {
                let _guard = scope.suppress(sibling_id.clone());
                store.write(&sibling, scope)?;
                if published && self.settings.published_policy == PublishedPolicy::Republish {
                    store.publish(&sibling, scope)?;
                }
            }

            tracing::debug!(record = %sibling_id, changed = changes.len(), "Wrote translation");
            if published {
                report.overwritten.push(sibling_id.clone());
            }
            report.written.push(sibling_id);
        }

        Ok(report)
    }
}

/// Reads the selected fields off the source record.
///
/// Fields the record does not expose are left out.
fn source_values<R: Record + ?Sized>(
    source: &R,
    fields: &IndexSet<String>,
) -> Vec<(String, FieldValue)> {
    fields
        .iter()
        .filter_map(|name| {
            let value = source.field(name);
            if value.is_none() {
                tracing::warn!(
                    "'{}' has no field '{}'; check the untranslatable fields configuration",
                    source.type_name(),
                    name
                );
            }
            value.map(|value| (name.clone(), value))
        })
        .collect()
}
