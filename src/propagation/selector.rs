//! Resolves which fields of a record type are shared across translations.

use indexmap::IndexSet;

use crate::config::UntranslatableSettings;

/// Resolves the untranslatable field set for a record type.
///
/// The result always names the fields that get propagated, in invert mode
/// too, so it doubles as a debugging aid for the configuration.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelector<'a> {
    /// Settings the selection is read from
    settings: &'a UntranslatableSettings,
}

impl<'a> FieldSelector<'a> {
    #[must_use]
    pub const fn new(settings: &'a UntranslatableSettings) -> Self {
        Self { settings }
    }

    /// Fields of `type_name` to propagate.
    ///
    /// - Type not configured: empty
    /// - `invert` off: the configured list, in configured order
    /// - `invert` on: `declared_fields` minus the configured list, in declared order
    #[must_use]
    pub fn resolve_fields<S: AsRef<str>>(
        &self,
        type_name: &str,
        declared_fields: &[S],
    ) -> IndexSet<String> {
        let Some(configured) = self.settings.fields_for(type_name) else {
            return IndexSet::new();
        };

        if !self.settings.invert {
            return configured.iter().cloned().collect();
        }

        let excluded: IndexSet<&str> = configured.iter().map(String::as_str).collect();
        declared_fields
            .iter()
            .map(|field| field.as_ref())
            .filter(|field| !excluded.contains(field))
            .map(ToString::to_string)
            .collect()
    }
}
