//! Settings management.

use std::path::PathBuf;
use std::sync::Arc;

use super::{
    ConfigError,
    UntranslatableSettings,
    loader,
};

/// Holds the validated settings the propagator and editor decorator read.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings, shared with propagators as a snapshot
    current_settings: Arc<UntranslatableSettings>,

    /// Directory the settings were loaded from
    config_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Arc::default(), config_root: None }
    }

    /// Loads settings from `config_root`, falling back to defaults.
    ///
    /// The loader validates the file, so a failed load leaves the current
    /// settings in place.
    ///
    /// # Returns
    /// - `Ok(())`: settings loaded and validated
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error (current settings are kept)
    pub fn load_settings(&mut self, config_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", config_root);

        let settings = if let Some(root) = &config_root {
            loader::load_from_dir(root)?.map_or_else(UntranslatableSettings::default, |loaded| {
                tracing::debug!("Loaded settings file: {:?}", loaded);
                loaded
            })
        } else {
            UntranslatableSettings::default()
        };

        self.current_settings = Arc::new(settings);
        self.config_root = config_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the current settings.
    ///
    /// Propagators built from an earlier snapshot keep the old settings.
    pub fn update_settings(
        &mut self,
        new_settings: UntranslatableSettings,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = Arc::new(new_settings);
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    #[must_use]
    pub fn get_settings(&self) -> &UntranslatableSettings {
        &self.current_settings
    }

    /// Shared snapshot of the current settings.
    #[must_use]
    pub fn snapshot(&self) -> Arc<UntranslatableSettings> {
        Arc::clone(&self.current_settings)
    }

    #[must_use]
    pub const fn config_root(&self) -> Option<&PathBuf> {
        self.config_root.as_ref()
    }
}
