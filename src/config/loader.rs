//! Settings file loader.

use std::path::Path;

use super::{
    ConfigError,
    UntranslatableSettings,
    ValidationError,
};

/// Name of the settings file looked up in the config directory.
pub(super) const CONFIG_FILE_NAME: &str = ".untranslatable-fields.json";

/// Top-level keys `UntranslatableSettings` understands.
const KNOWN_KEYS: [&str; 5] =
    ["fields", "invert", "addClassesToEditor", "addAttributesToEditor", "publishedPolicy"];

/// Loads and validates settings from `dir`.
///
/// Looks for `.untranslatable-fields.json` directly inside `dir`. Unknown
/// top-level keys are logged and ignored.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists, parsed and validated
/// - `Ok(None)`: no settings file
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error, with paths prefixed by the file name
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<UntranslatableSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    warn_unknown_keys(&raw);
    let settings: UntranslatableSettings = serde_json::from_value(raw)?;

    settings.validate().map_err(|errors| {
        ConfigError::ValidationErrors(
            errors
                .into_iter()
                .map(|error| {
                    ValidationError::new(
                        format!("{CONFIG_FILE_NAME}: {}", error.field_path),
                        error.message,
                    )
                })
                .collect(),
        )
    })?;

    Ok(Some(settings))
}

/// Logs top-level keys that would otherwise be dropped silently.
fn warn_unknown_keys(raw: &serde_json::Value) {
    let Some(object) = raw.as_object() else {
        return;
    };
    for key in object.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())) {
        tracing::warn!("Unknown key '{key}' in {CONFIG_FILE_NAME}, ignoring");
    }
}
