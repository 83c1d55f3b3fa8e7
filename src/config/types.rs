//! Settings types and validation.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fields.Article[1]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What to do when a propagation target is currently published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishedPolicy {
    /// Leave the published sibling untouched and report the conflict.
    #[default]
    Skip,
    /// Write the sibling anyway.
    Overwrite,
    /// Write the sibling, then publish it again.
    Republish,
    /// Stop propagating and return the conflict as an error.
    Abort,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UntranslatableSettings {
    /// Type name to the fields shared by every translation of that type.
    ///
    /// - `None`: nothing propagates (default)
    /// - A type missing from the map propagates nothing either.
    pub fields: Option<IndexMap<String, Vec<String>>>,

    /// Flips `fields` from "propagate only these" to "propagate all except these".
    pub invert: bool,

    /// CSS classes added to the editor widgets of untranslatable fields.
    pub add_classes_to_editor: Option<Vec<String>>,

    /// HTML attributes added to the editor widgets of untranslatable fields.
    pub add_attributes_to_editor: Option<IndexMap<String, String>>,

    pub published_policy: PublishedPolicy,
}

impl UntranslatableSettings {
    /// Configured field list for `type_name`, if any.
    #[must_use]
    pub fn fields_for(&self, type_name: &str) -> Option<&[String]> {
        self.fields.as_ref()?.get(type_name).map(Vec::as_slice)
    }

    /// Whether the editor decorator has anything to add.
    #[must_use]
    pub fn decorates_editor(&self) -> bool {
        self.add_classes_to_editor.as_ref().is_some_and(|classes| !classes.is_empty())
            || self.add_attributes_to_editor.as_ref().is_some_and(|attrs| !attrs.is_empty())
    }

    /// # Errors
    /// - Empty type or field name
    /// - Field listed twice for the same type
    /// - Empty editor class or attribute name
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (type_name, field_names) in self.fields.iter().flatten() {
            if type_name.is_empty() {
                errors.push(ValidationError::new(
                    "fields",
                    "The type name cannot be empty. Use the record's type name, for example: \"Article\"",
                ));
            }

            let mut seen = HashSet::new();
            for (index, field_name) in field_names.iter().enumerate() {
                let path = format!("fields.{type_name}[{index}]");
                if field_name.is_empty() {
                    errors.push(ValidationError::new(path, "The field name cannot be empty"));
                } else if !seen.insert(field_name.as_str()) {
                    errors.push(ValidationError::new(
                        path,
                        format!("Field '{field_name}' is listed more than once"),
                    ));
                }
            }
        }

        for (index, class) in self.add_classes_to_editor.iter().flatten().enumerate() {
            if class.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("addClassesToEditor[{index}]"),
                    "The class name cannot be empty",
                ));
            }
        }

        for attribute in self.add_attributes_to_editor.iter().flat_map(IndexMap::keys) {
            if attribute.trim().is_empty() {
                errors.push(ValidationError::new(
                    "addAttributesToEditor",
                    "The attribute name cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
