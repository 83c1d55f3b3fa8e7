//! Settings for field propagation and editor decoration.
/// Settings file loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    PublishedPolicy,
    UntranslatableSettings,
    ValidationError,
};
