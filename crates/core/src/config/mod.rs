//! Configuration management for buildpanel

mod settings;
pub mod validation;

// Re-export main types
pub use settings::{BuildCommandConfig, CONFIG_FILE_NAME, PanelConfig, ReloadConfig};
pub use validation::{ConfigValidator, DefaultConfigValidator};
