//! Marks untranslatable fields in the host's record editor.
//!
//! Purely presentational: widgets of fields that propagation will overwrite
//! get the configured CSS classes and attributes, so editors can tell which
//! inputs are shared by every translation.

use indexmap::IndexSet;

use crate::config::UntranslatableSettings;
use crate::propagation::FieldPropagator;
use crate::record::Record;

/// An editable widget bound to one record field.
pub trait EditorField {
    /// Name of the bound field.
    fn name(&self) -> &str;

    fn add_extra_class(&mut self, class: &str);

    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Adds the configured classes and attributes to every widget in `selection`.
///
/// Returns the number of decorated widgets.
pub fn decorate_editor_fields<'f, F>(
    settings: &UntranslatableSettings,
    selection: &IndexSet<String>,
    fields: impl IntoIterator<Item = &'f mut F>,
) -> usize
where
    F: EditorField + ?Sized + 'f,
{
    if !settings.decorates_editor() || selection.is_empty() {
        return 0;
    }

    let classes = settings.add_classes_to_editor.as_deref().unwrap_or_default();
    let attributes = settings.add_attributes_to_editor.as_ref();

    let mut decorated = 0;
    for field in fields {
        if !selection.contains(field.name()) {
            continue;
        }
        for class in classes {
            field.add_extra_class(class);
        }
        for (name, value) in attributes.into_iter().flatten() {
            field.set_attribute(name, value);
        }
        decorated += 1;
    }

    tracing::trace!("Decorated {decorated} untranslatable editor field(s)");
    decorated
}

impl FieldPropagator {
    /// Decorates the editor widgets of `record`'s untranslatable fields.
    pub fn decorate_editor<'f, R, F>(
        &self,
        record: &R,
        fields: impl IntoIterator<Item = &'f mut F>,
    ) -> usize
    where
        R: Record + ?Sized,
        F: EditorField + ?Sized + 'f,
    {
        if !self.settings().decorates_editor() {
            return 0;
        }
        let selection = self.untranslatable_fields(record);
        decorate_editor_fields(self.settings(), &selection, fields)
    }
}
